//! Configuration file discovery and loading.
//!
//! This module handles finding and loading manifest files from
//! various locations in the correct priority order.

use crate::config::merger::merge_configs;
use crate::config::schema::VercheckConfig;
use crate::error::{Result, VercheckError};
use std::fs;
use std::path::{Path, PathBuf};

/// Project manifest file name.
pub const PROJECT_CONFIG: &str = "vercheck.yml";

/// Local, uncommitted override file name.
pub const LOCAL_CONFIG: &str = "vercheck.local.yml";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`<config dir>/vercheck/config.yml`)
/// 2. Project config (`vercheck.yml`)
/// 3. Local overrides (`vercheck.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// User's global config
    pub user_global: Option<PathBuf>,

    /// Project config: vercheck.yml
    pub project: Option<PathBuf>,

    /// Local overrides: vercheck.local.yml
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self::discover_with_global(project_root, Self::find_user_global())
    }

    /// Discover project files, using an explicit user-global path.
    pub fn discover_with_global(project_root: &Path, user_global: Option<PathBuf>) -> Self {
        Self {
            user_global: user_global.filter(|p| p.exists()),
            project: existing(project_root.join(PROJECT_CONFIG)),
            project_local: existing(project_root.join(LOCAL_CONFIG)),
        }
    }

    /// Find user's global config under the platform config directory.
    fn find_user_global() -> Option<PathBuf> {
        existing(dirs::config_dir()?.join("vercheck").join("config.yml"))
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into VercheckConfig.
///
/// An empty document yields the default config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<VercheckConfig> {
    let value = parse_value(content, source_path)?;
    from_value(value, source_path)
}

/// Load a single config file and parse it into VercheckConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VercheckConfig> {
    let content = read_config(path)?;
    parse_config(&content, path)
}

/// Load a config file as raw YAML Value (for merging).
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = read_config(path)?;
    parse_value(&content, path)
}

/// Load and merge all config files for a project.
///
/// # Errors
///
/// Returns `ConfigNotFound` if no project config exists.
/// Returns `ConfigParseError` if any config file is invalid.
pub fn load_merged_config(project_root: &Path) -> Result<VercheckConfig> {
    let paths = ConfigPaths::discover(project_root);
    if !paths.has_project_config() {
        return Err(VercheckError::ConfigNotFound {
            path: project_root.join(PROJECT_CONFIG),
        });
    }
    load_from_paths(&paths, project_root)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
/// Otherwise, discovers and merges all config files. With `required` unset,
/// a project without a manifest gets whatever the user-global file holds,
/// or the defaults.
pub fn load_config(
    project_root: &Path,
    config_override: Option<&Path>,
    required: bool,
) -> Result<VercheckConfig> {
    if let Some(path) = config_override {
        tracing::debug!(path = %path.display(), "loading config override");
        return load_config_file(path);
    }

    if required {
        return load_merged_config(project_root);
    }

    let paths = ConfigPaths::discover(project_root);
    load_from_paths(&paths, project_root)
}

fn load_from_paths(paths: &ConfigPaths, project_root: &Path) -> Result<VercheckConfig> {
    let mut configs = Vec::new();
    for path in paths.all_existing() {
        tracing::debug!(path = %path.display(), "loading config");
        let value = load_config_value(path)?;
        // Empty files parse to null, which would wipe everything merged so far.
        if !value.is_null() {
            configs.push(value);
        }
    }

    let merged = merge_configs(&configs);
    serde_yaml::from_value(merged).map_err(|e| VercheckError::ConfigParseError {
        path: project_root.join(PROJECT_CONFIG),
        message: format!("Failed to parse merged config: {}", e),
    })
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VercheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VercheckError::Io(e)
        }
    })
}

fn parse_value(content: &str, source_path: &Path) -> Result<serde_yaml::Value> {
    if content.trim().is_empty() {
        return Ok(serde_yaml::Value::Null);
    }
    serde_yaml::from_str(content).map_err(|e| VercheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn from_value(value: serde_yaml::Value, source_path: &Path) -> Result<VercheckConfig> {
    if value.is_null() {
        return Ok(VercheckConfig::default());
    }
    serde_yaml::from_value(value).map_err(|e| VercheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverKind;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn discover_finds_project_and_local() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), PROJECT_CONFIG, "requirements: {}");
        write(temp.path(), LOCAL_CONFIG, "requirements: {}");

        let paths = ConfigPaths::discover_with_global(temp.path(), None);
        assert!(paths.has_project_config());
        assert!(paths.project_local.is_some());
        assert_eq!(paths.all_existing().len(), 2);
    }

    #[test]
    fn discover_ignores_missing_global() {
        let temp = TempDir::new().unwrap();
        let paths =
            ConfigPaths::discover_with_global(temp.path(), Some(temp.path().join("nope.yml")));
        assert!(paths.user_global.is_none());
        assert!(paths.all_existing().is_empty());
    }

    #[test]
    fn all_existing_is_in_merge_order() {
        let temp = TempDir::new().unwrap();
        let global = write(temp.path(), "global.yml", "{}");
        let project = write(temp.path(), PROJECT_CONFIG, "{}");
        let local = write(temp.path(), LOCAL_CONFIG, "{}");

        let paths = ConfigPaths::discover_with_global(temp.path(), Some(global.clone()));
        assert_eq!(paths.all_existing(), vec![&global, &project, &local]);
    }

    #[test]
    fn load_merged_config_requires_project_file() {
        let temp = TempDir::new().unwrap();
        let err = load_merged_config(temp.path()).unwrap_err();
        assert!(matches!(err, VercheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn local_overrides_project() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            PROJECT_CONFIG,
            "requirements:\n  git: \"2.0\"\n  node: \"18\"\n",
        );
        write(temp.path(), LOCAL_CONFIG, "requirements:\n  node: \"20\"\n");

        let paths = ConfigPaths::discover_with_global(temp.path(), None);
        let config = load_from_paths(&paths, temp.path()).unwrap();
        assert_eq!(config.requirements["git"], "2.0");
        assert_eq!(config.requirements["node"], "20");
    }

    #[test]
    fn empty_local_file_does_not_wipe_project() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), PROJECT_CONFIG, "requirements:\n  git: \"2.0\"\n");
        write(temp.path(), LOCAL_CONFIG, "");

        let paths = ConfigPaths::discover_with_global(temp.path(), None);
        let config = load_from_paths(&paths, temp.path()).unwrap();
        assert_eq!(config.requirements["git"], "2.0");
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("missing.yml")).unwrap_err();
        assert!(matches!(err, VercheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn load_config_file_invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "bad.yml", "requirements: [unclosed");
        let err = load_config_file(&path).unwrap_err();
        match err {
            VercheckError::ConfigParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn load_config_override_skips_discovery() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), PROJECT_CONFIG, "requirements:\n  git: \"2.0\"\n");
        let custom = write(temp.path(), "custom.yml", "resolvers: [registry]\n");

        let config = load_config(temp.path(), Some(&custom), true).unwrap();
        assert!(config.requirements.is_empty());
        assert_eq!(config.resolvers, vec![ResolverKind::Registry]);
    }

    #[test]
    fn load_config_optional_without_manifest() {
        let temp = TempDir::new().unwrap();
        // Only asserts the project layer; a user-global file may exist on the host.
        assert!(load_config(temp.path(), None, false).is_ok());
        assert!(load_config(temp.path(), None, true).is_err());
    }

    #[test]
    fn parse_config_empty_is_default() {
        let config = parse_config("   \n", Path::new("x.yml")).unwrap();
        assert_eq!(config, VercheckConfig::default());
    }
}
