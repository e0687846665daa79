//! Manifest loading and parsing for vercheck.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//!
//! # Example
//!
//! ```
//! use vercheck::config::load_merged_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("vercheck.yml"), "requirements:\n  git: \"2.30\"\n").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! assert_eq!(config.requirements["git"], "2.30");
//! ```
//!
//! # Configuration File Locations
//!
//! vercheck discovers and merges configuration in this order:
//! 1. User global config (`<config dir>/vercheck/config.yml`)
//! 2. Project config (`vercheck.yml`)
//! 3. Local overrides (`vercheck.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;

pub use schema::{ModuleConfig, ResolverKind, VercheckConfig};

pub use loader::{
    load_config, load_config_file, load_config_value, load_merged_config, parse_config,
    ConfigPaths, LOCAL_CONFIG, PROJECT_CONFIG,
};

pub use merger::{deep_merge, merge_configs};
