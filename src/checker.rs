//! Install-needed decisions.
//!
//! The [`VersionChecker`] answers one question: does this module need to be
//! (re)installed to satisfy a required version? The answer is `true` when
//! the module is absent or reports a version strictly older than required.
//!
//! Absence is the only failure turned into an answer. A module that exists
//! but fails to load, reports no version, or reports something that is not a
//! dotted version propagates its error to the caller, as does a malformed
//! required version.
//!
//! # Example
//!
//! ```
//! use vercheck::checker::VersionChecker;
//! use vercheck::resolver::RegistryResolver;
//!
//! let registry = RegistryResolver::new().with_module("numpy", "2.5.0");
//! let checker = VersionChecker::new(registry);
//!
//! assert!(!checker.needs_install("numpy", "2.4.9").unwrap());
//! assert!(checker.needs_install("numpy", "2.5.1").unwrap());
//! assert!(checker.needs_install("pandas", "1.0.0").unwrap());
//! ```

use serde::Serialize;

use crate::error::{Result, VercheckError};
use crate::resolver::{ModuleHandle, ModuleOrigin, ModuleResolver};
use crate::version::{parse_version, Version};

/// Detailed result of one install-needed decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallCheck {
    /// Module that was checked.
    pub module: String,
    /// Required version as given by the caller.
    pub required: String,
    /// Version the module reports, if it is installed.
    pub installed: Option<Version>,
    /// Where the module was found, if it is installed.
    pub origin: Option<ModuleOrigin>,
    /// Whether the module must be installed or upgraded.
    pub needs_install: bool,
}

/// Outcome of checking one entry in a batch.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Module that was checked.
    pub module: String,
    /// Required version as given by the caller.
    pub required: String,
    /// The decision, or the error that prevented it.
    pub result: Result<InstallCheck>,
}

/// Decides whether modules need installing, using a [`ModuleResolver`].
#[derive(Debug, Clone)]
pub struct VersionChecker<R> {
    resolver: R,
}

impl<R: ModuleResolver> VersionChecker<R> {
    /// Create a checker over the given resolver.
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Whether `module` is absent or older than `required`.
    ///
    /// # Errors
    ///
    /// Everything except `ModuleNotFound` propagates:
    /// `ModuleLoadFailed`, `MissingVersion` and `VersionParse`.
    pub fn needs_install(&self, module: &str, required: &str) -> Result<bool> {
        self.inspect(module, required).map(|check| check.needs_install)
    }

    /// Same decision as [`needs_install`](Self::needs_install), with details.
    pub fn inspect(&self, module: &str, required: &str) -> Result<InstallCheck> {
        let handle = match self.resolver.resolve(module) {
            Ok(handle) => handle,
            Err(VercheckError::ModuleNotFound { .. }) => {
                tracing::debug!(module, required, "module not installed");
                return Ok(InstallCheck {
                    module: module.to_string(),
                    required: required.to_string(),
                    installed: None,
                    origin: None,
                    needs_install: true,
                });
            }
            Err(e) => return Err(e),
        };

        let reported = self.resolver.version_of(&handle)?;
        let installed = parse_version(&reported)?;
        let wanted = parse_version(required)?;
        let needs_install = installed < wanted;

        tracing::debug!(
            module,
            installed = %installed,
            required = %wanted,
            needs_install,
            "compared versions"
        );

        Ok(InstallCheck {
            module: module.to_string(),
            required: required.to_string(),
            installed: Some(installed),
            origin: Some(handle.origin),
            needs_install,
        })
    }

    /// Check several requirements independently.
    ///
    /// One entry failing does not stop the others; each outcome carries its
    /// own result, in input order.
    pub fn check_all<'a, I>(&self, requirements: I) -> Vec<CheckOutcome>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        requirements
            .into_iter()
            .map(|(module, required)| CheckOutcome {
                module: module.to_string(),
                required: required.to_string(),
                result: self.inspect(module, required),
            })
            .collect()
    }
}

/// One-shot form of [`VersionChecker::needs_install`].
pub fn needs_install<R: ModuleResolver + ?Sized>(
    resolver: &R,
    module: &str,
    required: &str,
) -> Result<bool> {
    VersionChecker::new(ResolverRef(resolver)).needs_install(module, required)
}

/// Borrowed resolver, so the one-shot helper need not take ownership.
struct ResolverRef<'a, R: ?Sized>(&'a R);

impl<R: ModuleResolver + ?Sized> ModuleResolver for ResolverRef<'_, R> {
    fn kind(&self) -> &'static str {
        self.0.kind()
    }

    fn resolve(&self, name: &str) -> Result<ModuleHandle> {
        self.0.resolve(name)
    }

    fn version_of(&self, handle: &ModuleHandle) -> Result<String> {
        self.0.version_of(handle)
    }

    fn owns(&self, handle: &ModuleHandle) -> bool {
        self.0.owns(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{ChainResolver, RegistryResolver};

    fn checker() -> VersionChecker<RegistryResolver> {
        VersionChecker::new(
            RegistryResolver::new()
                .with_module("numpy", "2.5.0")
                .with_module("weird", "2.5.0-dev")
                .with_unversioned("legacy"),
        )
    }

    /// Resolver whose modules all fail during initialization.
    struct FailingResolver;

    impl ModuleResolver for FailingResolver {
        fn kind(&self) -> &'static str {
            "failing"
        }

        fn resolve(&self, name: &str) -> Result<ModuleHandle> {
            Err(VercheckError::ModuleLoadFailed {
                name: name.to_string(),
                message: "ImportError during initialization".into(),
            })
        }

        fn version_of(&self, handle: &ModuleHandle) -> Result<String> {
            Err(VercheckError::MissingVersion {
                name: handle.name.clone(),
            })
        }
    }

    #[test]
    fn absent_module_needs_install() {
        assert!(checker()
            .needs_install("definitely_not_a_real_module_xyz", "1.0.0")
            .unwrap());
    }

    #[test]
    fn older_required_version_is_satisfied() {
        assert!(!checker().needs_install("numpy", "2.4.9").unwrap());
    }

    #[test]
    fn newer_required_version_needs_install() {
        assert!(checker().needs_install("numpy", "2.5.1").unwrap());
    }

    #[test]
    fn equal_version_is_satisfied() {
        assert!(!checker().needs_install("numpy", "2.5.0").unwrap());
    }

    #[test]
    fn longer_required_version_with_equal_prefix_needs_install() {
        let checker = VersionChecker::new(RegistryResolver::new().with_module("tool", "1.2"));
        assert!(checker.needs_install("tool", "1.2.0").unwrap());
        assert!(!checker.needs_install("tool", "1.1.9").unwrap());
    }

    #[test]
    fn numeric_comparison_not_textual() {
        let checker = VersionChecker::new(RegistryResolver::new().with_module("tool", "10.0"));
        assert!(!checker.needs_install("tool", "9.9").unwrap());
    }

    #[test]
    fn malformed_required_version_propagates() {
        let err = checker().needs_install("numpy", "abc").unwrap_err();
        assert!(matches!(err, VercheckError::VersionParse { .. }));
    }

    #[test]
    fn malformed_required_version_ignored_when_absent() {
        assert!(checker().needs_install("absent", "abc").unwrap());
    }

    #[test]
    fn malformed_installed_version_propagates() {
        let err = checker().needs_install("weird", "1.0").unwrap_err();
        match err {
            VercheckError::VersionParse { input, .. } => assert_eq!(input, "2.5.0-dev"),
            other => panic!("Expected VersionParse, got {:?}", other),
        }
    }

    #[test]
    fn missing_version_propagates() {
        let err = checker().needs_install("legacy", "1.0").unwrap_err();
        assert!(matches!(err, VercheckError::MissingVersion { .. }));
    }

    #[test]
    fn load_failure_propagates() {
        let checker = VersionChecker::new(FailingResolver);
        let err = checker.needs_install("numpy", "1.0").unwrap_err();
        assert!(matches!(err, VercheckError::ModuleLoadFailed { .. }));
    }

    #[test]
    fn repeated_calls_agree() {
        let checker = checker();
        let first = checker.needs_install("numpy", "2.5.1").unwrap();
        let second = checker.needs_install("numpy", "2.5.1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn inspect_reports_details() {
        let check = checker().inspect("numpy", "2.5.1").unwrap();
        assert_eq!(check.module, "numpy");
        assert_eq!(check.required, "2.5.1");
        assert_eq!(check.installed, Some(parse_version("2.5.0").unwrap()));
        assert_eq!(
            check.origin,
            Some(ModuleOrigin::Registry {
                version: Some("2.5.0".into())
            })
        );
        assert!(check.needs_install);
    }

    #[test]
    fn inspect_absent_has_no_installed_version() {
        let check = checker().inspect("absent", "1.0").unwrap();
        assert!(check.installed.is_none());
        assert!(check.origin.is_none());
        assert!(check.needs_install);
    }

    #[test]
    fn install_check_serializes_to_json() {
        let check = checker().inspect("numpy", "2.4.0").unwrap();
        let json = serde_json::to_value(&check).unwrap();
        assert_eq!(json["module"], "numpy");
        assert_eq!(json["installed"], "2.5.0");
        assert_eq!(json["origin"]["kind"], "registry");
        assert_eq!(json["needs_install"], false);
    }

    #[test]
    fn check_all_keeps_going_after_errors() {
        let outcomes = checker().check_all([
            ("numpy", "3.0"),
            ("legacy", "1.0"),
            ("absent", "1.0"),
            ("numpy", "not.a.version"),
        ]);

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].result.as_ref().unwrap().needs_install);
        assert!(matches!(
            outcomes[1].result,
            Err(VercheckError::MissingVersion { .. })
        ));
        assert!(outcomes[2].result.as_ref().unwrap().needs_install);
        assert!(matches!(
            outcomes[3].result,
            Err(VercheckError::VersionParse { .. })
        ));
        assert_eq!(outcomes[3].required, "not.a.version");
    }

    #[test]
    fn one_shot_helper_borrows_resolver() {
        let chain = ChainResolver::new().with(RegistryResolver::new().with_module("git", "2.39.2"));
        assert!(!needs_install(&chain, "git", "2.30").unwrap());
        assert!(needs_install(&chain, "git", "2.40").unwrap());
        assert!(needs_install(&chain, "hg", "1.0").unwrap());
    }
}
