//! Module resolution: locating a named module and reading its version.
//!
//! The checker never looks modules up itself. It talks to a
//! [`ModuleResolver`], which answers two questions:
//!
//! 1. Is a module with this name installed? ([`ModuleResolver::resolve`])
//! 2. What version does it report? ([`ModuleResolver::version_of`])
//!
//! Absence must be reported as [`VercheckError::ModuleNotFound`] and nothing
//! else, since that is the one error the checker turns into "install needed".
//!
//! # Modules
//!
//! - [`registry`] - Static registry of known module versions
//! - [`path`] - Executables on `PATH` that report a version via `--version`
//! - [`chain`] - Ordered fallback across several resolvers
//!
//! [`VercheckError::ModuleNotFound`]: crate::error::VercheckError::ModuleNotFound

pub mod chain;
pub mod path;
pub mod registry;

pub use chain::ChainResolver;
pub use path::PathResolver;
pub use registry::RegistryResolver;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::Result;

/// Where a resolved module was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModuleOrigin {
    /// Declared in a static registry, with the version it was declared at.
    Registry {
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<String>,
    },
    /// An executable found on the search path.
    Path { path: PathBuf },
}

impl fmt::Display for ModuleOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleOrigin::Registry { .. } => write!(f, "registry"),
            ModuleOrigin::Path { path } => write!(f, "{}", path.display()),
        }
    }
}

/// A module that a resolver has located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleHandle {
    /// Name the module was resolved under.
    pub name: String,
    /// Where it was found.
    pub origin: ModuleOrigin,
    /// Kind of the resolver that produced this handle.
    pub resolver: &'static str,
}

/// Capability to resolve modules by name and read their reported version.
///
/// Implementations must be safe to share across threads; the crate adds no
/// locking around calls.
pub trait ModuleResolver: Send + Sync {
    /// Short identifier for this resolver kind (e.g., "registry", "path").
    fn kind(&self) -> &'static str;

    /// Locate a module by name.
    ///
    /// # Errors
    ///
    /// - `ModuleNotFound` when no such module is installed
    /// - `ModuleLoadFailed` when it exists but cannot be loaded
    fn resolve(&self, name: &str) -> Result<ModuleHandle>;

    /// Read the version string a resolved module reports about itself.
    ///
    /// # Errors
    ///
    /// - `MissingVersion` when the module exposes no version
    /// - `ModuleLoadFailed` when reading the version fails
    fn version_of(&self, handle: &ModuleHandle) -> Result<String>;

    /// Whether this resolver produced `handle` and can read its version.
    fn owns(&self, handle: &ModuleHandle) -> bool {
        handle.resolver == self.kind()
    }
}

impl<R: ModuleResolver + ?Sized> ModuleResolver for Box<R> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn resolve(&self, name: &str) -> Result<ModuleHandle> {
        (**self).resolve(name)
    }

    fn version_of(&self, handle: &ModuleHandle) -> Result<String> {
        (**self).version_of(handle)
    }

    fn owns(&self, handle: &ModuleHandle) -> bool {
        (**self).owns(handle)
    }
}
