//! Configuration schema definitions for vercheck.
//!
//! This module contains the struct definitions that map to the
//! `vercheck.yml` manifest format.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Root configuration structure for vercheck.yml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VercheckConfig {
    /// Required minimum version per module name.
    ///
    /// Kept as raw strings so one malformed entry fails only its own check.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub requirements: BTreeMap<String, String>,

    /// Static registry entries
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub modules: HashMap<String, ModuleConfig>,

    /// Per-module arguments used to ask an executable for its version
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub version_args: HashMap<String, Vec<String>>,

    /// Resolvers to consult, in order
    #[serde(default = "default_resolvers")]
    pub resolvers: Vec<ResolverKind>,
}

impl Default for VercheckConfig {
    fn default() -> Self {
        Self {
            requirements: BTreeMap::new(),
            modules: HashMap::new(),
            version_args: HashMap::new(),
            resolvers: default_resolvers(),
        }
    }
}

/// A module declared in the static registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ModuleConfig {
    /// Version the module reports. Absent means installed but unversioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A source of module information.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    /// Entries from the `modules:` section
    Registry,
    /// Executables on `PATH`
    Path,
}

fn default_resolvers() -> Vec<ResolverKind> {
    vec![ResolverKind::Registry, ResolverKind::Path]
}
