//! Executables on the search path, treated as modules.
//!
//! A module named `git` resolves when an executable file called `git` is
//! found in one of the search directories. Its self-reported version is
//! whatever dotted number it prints for `git --version`.
//!
//! Lookup walks the directories directly instead of shelling out to
//! `which`, whose behavior varies across systems.
//!
//! # Example
//!
//! ```no_run
//! use vercheck::resolver::{ModuleResolver, PathResolver};
//!
//! let resolver = PathResolver::from_system_path();
//! let handle = resolver.resolve("git").unwrap();
//! println!("git reports {}", resolver.version_of(&handle).unwrap());
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex};

use regex::Regex;

use crate::error::{Result, VercheckError};

use super::{ModuleHandle, ModuleOrigin, ModuleResolver};

/// Arguments used when no per-module override is configured.
pub const DEFAULT_VERSION_ARGS: &[&str] = &["--version"];

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_DOTTED_VERSION, r"\d+(?:\.\d+)+");
lazy_regex!(RE_BARE_VERSION, r"\d+");

/// Resolves modules to executables and reads their `--version` output.
///
/// Version lookups are cached per executable path for the lifetime of the
/// resolver, so a module is only spawned once.
#[derive(Debug)]
pub struct PathResolver {
    path_entries: Vec<PathBuf>,
    version_args: HashMap<String, Vec<String>>,
    cache: Mutex<HashMap<PathBuf, String>>,
}

impl PathResolver {
    /// Create a resolver that searches the given directories in order.
    pub fn new(path_entries: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            version_args: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Create a resolver over the current process's `PATH`.
    pub fn from_system_path() -> Self {
        Self::new(parse_system_path())
    }

    /// Override the arguments used to ask `module` for its version.
    pub fn with_version_args(mut self, module: impl Into<String>, args: Vec<String>) -> Self {
        self.version_args.insert(module.into(), args);
        self
    }

    /// Replace all per-module version argument overrides.
    pub fn with_version_arg_map(mut self, args: HashMap<String, Vec<String>>) -> Self {
        self.version_args = args;
        self
    }

    /// Forget the cached version for one module's executable.
    pub fn invalidate(&self, path: &Path) {
        self.lock_cache().remove(path);
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, String>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn args_for(&self, module: &str) -> Vec<String> {
        self.version_args.get(module).cloned().unwrap_or_else(|| {
            DEFAULT_VERSION_ARGS
                .iter()
                .map(|s| s.to_string())
                .collect()
        })
    }

    fn run_version_command(&self, name: &str, binary: &Path) -> Result<String> {
        let args = self.args_for(name);
        tracing::debug!(module = name, binary = %binary.display(), ?args, "querying version");

        let output = Command::new(binary)
            .args(&args)
            .output()
            .map_err(|e| VercheckError::ModuleLoadFailed {
                name: name.to_string(),
                message: format!("could not run {}: {}", binary.display(), e),
            })?;

        if !output.status.success() {
            let message = match output.status.code() {
                Some(code) => format!("version command exited with code {}", code),
                None => "version command was terminated by a signal".to_string(),
            };
            return Err(VercheckError::ModuleLoadFailed {
                name: name.to_string(),
                message,
            });
        }

        // Some tools (java) print their version on stderr.
        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push('\n');
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        extract_version(&text).ok_or_else(|| VercheckError::MissingVersion {
            name: name.to_string(),
        })
    }
}

impl ModuleResolver for PathResolver {
    fn kind(&self) -> &'static str {
        "path"
    }

    fn resolve(&self, name: &str) -> Result<ModuleHandle> {
        // A name with separators would escape the search directories.
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(VercheckError::ModuleNotFound {
                name: name.to_string(),
            });
        }

        let path = resolve_tool_path(name, &self.path_entries).ok_or_else(|| {
            tracing::debug!(module = name, "not found on search path");
            VercheckError::ModuleNotFound {
                name: name.to_string(),
            }
        })?;

        tracing::debug!(module = name, path = %path.display(), "resolved on search path");
        Ok(ModuleHandle {
            name: name.to_string(),
            origin: ModuleOrigin::Path { path },
            resolver: self.kind(),
        })
    }

    fn version_of(&self, handle: &ModuleHandle) -> Result<String> {
        let ModuleOrigin::Path { path } = &handle.origin else {
            return Err(VercheckError::ModuleLoadFailed {
                name: handle.name.clone(),
                message: "handle was not resolved from the search path".to_string(),
            });
        };

        if let Some(cached) = self.lock_cache().get(path) {
            return Ok(cached.clone());
        }

        let version = self.run_version_command(&handle.name, path)?;
        self.lock_cache().insert(path.clone(), version.clone());
        Ok(version)
    }
}

/// Pull the first version-looking number out of a tool's output.
///
/// Prefers a dotted run (`3.11.4` in `Python 3.11.4`), falling back to the
/// first bare integer for tools that report a single number.
pub fn extract_version(output: &str) -> Option<String> {
    RE_DOTTED_VERSION
        .find(output)
        .or_else(|| RE_BARE_VERSION.find(output))
        .map(|m| m.as_str().to_string())
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let suffix = std::env::consts::EXE_SUFFIX;
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
        if !suffix.is_empty() {
            let candidate = dir.join(format!("{}{}", tool, suffix));
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
