//! Ordered fallback across resolvers.
//!
//! Each resolver is asked in turn. Only "not found" moves on to the next
//! one; any other failure stops the chain, so a registry entry without a
//! version is never papered over by a binary of the same name.

use crate::config::{ResolverKind, VercheckConfig};
use crate::error::{Result, VercheckError};

use super::{ModuleHandle, ModuleResolver, PathResolver, RegistryResolver};

/// Tries a list of resolvers in order.
#[derive(Default)]
pub struct ChainResolver {
    resolvers: Vec<Box<dyn ModuleResolver>>,
}

impl ChainResolver {
    /// Create an empty chain. An empty chain finds nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the chain a manifest asks for, in its `resolvers:` order.
    pub fn from_config(config: &VercheckConfig) -> Self {
        let mut chain = Self::new();
        for kind in &config.resolvers {
            match kind {
                ResolverKind::Registry => {
                    chain.push(Box::new(RegistryResolver::from_config(&config.modules)));
                }
                ResolverKind::Path => {
                    chain.push(Box::new(
                        PathResolver::from_system_path()
                            .with_version_arg_map(config.version_args.clone()),
                    ));
                }
            }
        }
        chain
    }

    /// Append a resolver to the end of the chain.
    pub fn with(mut self, resolver: impl ModuleResolver + 'static) -> Self {
        self.resolvers.push(Box::new(resolver));
        self
    }

    /// Append an already boxed resolver.
    pub fn push(&mut self, resolver: Box<dyn ModuleResolver>) {
        self.resolvers.push(resolver);
    }

    /// Number of resolvers in the chain.
    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    /// Whether the chain has no resolvers.
    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }
}

impl ModuleResolver for ChainResolver {
    fn kind(&self) -> &'static str {
        "chain"
    }

    fn resolve(&self, name: &str) -> Result<ModuleHandle> {
        for resolver in &self.resolvers {
            match resolver.resolve(name) {
                Err(VercheckError::ModuleNotFound { .. }) => {
                    tracing::trace!(
                        module = name,
                        resolver = resolver.kind(),
                        "not found, trying next"
                    );
                }
                other => return other,
            }
        }
        Err(VercheckError::ModuleNotFound {
            name: name.to_string(),
        })
    }

    fn version_of(&self, handle: &ModuleHandle) -> Result<String> {
        let owners: Vec<&dyn ModuleResolver> = self
            .resolvers
            .iter()
            .map(|r| &**r)
            .filter(|r| r.owns(handle))
            .collect();

        let resolver = match owners.as_slice() {
            [] => None,
            [only] => Some(*only),
            // Several resolvers of one kind: the one that produced the handle
            // is the first that still resolves the name to the same origin.
            many => many.iter().copied().find(|r| {
                matches!(r.resolve(&handle.name), Ok(found) if found.origin == handle.origin)
            }),
        };

        resolver
            .ok_or_else(|| VercheckError::ModuleLoadFailed {
                name: handle.name.clone(),
                message: format!("no '{}' resolver in chain", handle.resolver),
            })?
            .version_of(handle)
    }

    fn owns(&self, handle: &ModuleHandle) -> bool {
        self.resolvers.iter().any(|r| r.owns(handle))
    }
}
