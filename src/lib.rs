//! vercheck - decide whether installed modules meet a required version.
//!
//! Given a module name and a required dotted version, vercheck answers
//! whether the module needs (re)installing: yes when it is absent or reports
//! an older version. It never installs anything itself.
//!
//! # Modules
//!
//! - [`checker`] - The install-needed decision
//! - [`version`] - Dotted version parsing and ordering
//! - [`resolver`] - Locating modules and reading their reported versions
//! - [`config`] - Manifest loading and layering
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use vercheck::{needs_install, parse_version, RegistryResolver};
//!
//! assert_eq!(parse_version("1.10.2").unwrap().segments(), &[1, 10, 2]);
//!
//! let registry = RegistryResolver::new().with_module("numpy", "2.5.0");
//! assert!(!needs_install(&registry, "numpy", "2.5.0").unwrap());
//! assert!(needs_install(&registry, "definitely_not_a_real_module_xyz", "1.0.0").unwrap());
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
pub mod ui;
pub mod version;

pub use checker::{needs_install, CheckOutcome, InstallCheck, VersionChecker};
pub use error::{Result, VercheckError};
pub use resolver::{
    ChainResolver, ModuleHandle, ModuleOrigin, ModuleResolver, PathResolver, RegistryResolver,
};
pub use version::{parse_version, Version};
