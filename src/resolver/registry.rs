//! Static registry of known module versions.
//!
//! Used when the environment has no dynamic lookup of its own, or to pin
//! what a module reports without touching the system. Entries come from
//! code ([`RegistryResolver::with_module`]) or from the `modules:` section
//! of the manifest.

use std::collections::HashMap;

use crate::config::ModuleConfig;
use crate::error::{Result, VercheckError};

use super::{ModuleHandle, ModuleOrigin, ModuleResolver};

/// Resolves modules from a fixed table of name → reported version.
#[derive(Debug, Clone, Default)]
pub struct RegistryResolver {
    modules: HashMap<String, Option<String>>,
}

impl RegistryResolver {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from manifest `modules:` entries.
    pub fn from_config(modules: &HashMap<String, ModuleConfig>) -> Self {
        let modules = modules
            .iter()
            .map(|(name, entry)| (name.clone(), entry.version.clone()))
            .collect();
        Self { modules }
    }

    /// Register a module that reports `version`.
    pub fn with_module(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.modules.insert(name.into(), Some(version.into()));
        self
    }

    /// Register a module that is installed but reports no version.
    pub fn with_unversioned(mut self, name: impl Into<String>) -> Self {
        self.modules.insert(name.into(), None);
        self
    }

    /// Number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Whether the registry has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ModuleResolver for RegistryResolver {
    fn kind(&self) -> &'static str {
        "registry"
    }

    fn resolve(&self, name: &str) -> Result<ModuleHandle> {
        let Some(version) = self.modules.get(name) else {
            return Err(VercheckError::ModuleNotFound {
                name: name.to_string(),
            });
        };

        tracing::trace!(module = name, "resolved from registry");
        Ok(ModuleHandle {
            name: name.to_string(),
            origin: ModuleOrigin::Registry {
                version: version.clone(),
            },
            resolver: self.kind(),
        })
    }

    fn version_of(&self, handle: &ModuleHandle) -> Result<String> {
        match &handle.origin {
            ModuleOrigin::Registry {
                version: Some(version),
            } => Ok(version.clone()),
            ModuleOrigin::Registry { version: None } => Err(VercheckError::MissingVersion {
                name: handle.name.clone(),
            }),
            ModuleOrigin::Path { path } => Err(VercheckError::ModuleLoadFailed {
                name: handle.name.clone(),
                message: format!("{} was not resolved from the registry", path.display()),
            }),
        }
    }
}
