//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for state shared by every command
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{self, ResolverKind, VercheckConfig};
use crate::error::Result;
use crate::resolver::ChainResolver;
use crate::ui::UserInterface;

/// Exit code when a command fails with an error.
pub const EXIT_ERROR: i32 = 1;

/// Exit code when a module needs installing and the caller asked to know.
pub const EXIT_NEEDS_INSTALL: i32 = 3;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where to find configuration and which resolvers to use.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root to discover the manifest in.
    pub project_root: PathBuf,
    /// Explicit manifest path, skipping discovery.
    pub config_override: Option<PathBuf>,
    /// Restrict resolution to the static registry.
    pub registry_only: bool,
}

impl CommandContext {
    /// Create a context rooted at `project_root` with no overrides.
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: None,
            registry_only: false,
        }
    }

    /// Load the manifest. With `required`, a missing project manifest is an error.
    pub fn load_config(&self, required: bool) -> Result<VercheckConfig> {
        let mut config = config::load_config(
            &self.project_root,
            self.config_override.as_deref(),
            required,
        )?;
        if self.registry_only {
            config.resolvers = vec![ResolverKind::Registry];
        }
        Ok(config)
    }

    /// Build the resolver chain for a loaded manifest.
    pub fn resolver(&self, config: &VercheckConfig) -> ChainResolver {
        ChainResolver::from_config(config)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            context: CommandContext::new(&project_root),
        }
    }

    /// Create a dispatcher with global CLI flags applied.
    pub fn from_cli(cli: &Cli, project_root: PathBuf) -> Self {
        let mut dispatcher = Self::new(project_root);
        dispatcher.context.config_override = cli.config.clone();
        dispatcher.context.registry_only = cli.registry_only;
        dispatcher
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.context.project_root
    }

    /// Get the shared command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Parse(args) => {
                let cmd = super::parse::ParseCommand::new(args.clone());
                cmd.execute(ui)
            }
            Commands::Verify(args) => {
                let cmd = super::verify::VerifyCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(EXIT_NEEDS_INSTALL);
        assert!(!result.success);
        assert_eq!(result.exit_code, 3);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
        assert!(!dispatcher.context().registry_only);
    }

    #[test]
    fn from_cli_applies_global_flags() {
        let cli = Cli::parse_from([
            "vercheck",
            "--registry-only",
            "--config",
            "x.yml",
            "verify",
        ]);
        let dispatcher = CommandDispatcher::from_cli(&cli, PathBuf::from("/test"));
        assert!(dispatcher.context().registry_only);
        assert_eq!(
            dispatcher.context().config_override,
            Some(PathBuf::from("x.yml"))
        );
    }

    #[test]
    fn registry_only_overrides_manifest_resolvers() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("vercheck.yml"), "resolvers: [path, registry]\n").unwrap();

        let mut context = CommandContext::new(temp.path());
        context.registry_only = true;
        let config = context.load_config(true).unwrap();
        assert_eq!(config.resolvers, vec![ResolverKind::Registry]);
    }

    #[test]
    fn dispatches_parse() {
        let cli = Cli::parse_from(["vercheck", "parse", "1.2.3"]);
        let dispatcher = CommandDispatcher::from_cli(&cli, PathBuf::from("/test"));
        let mut ui = crate::ui::MockUI::new();
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();
        assert!(result.success);
        assert_eq!(ui.outputs(), &["1 2 3".to_string()]);
    }
}
