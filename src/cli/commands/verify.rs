//! Verify command implementation.
//!
//! The `vercheck verify` command checks every requirement in the manifest
//! and reports each one.

use crate::checker::VersionChecker;
use crate::cli::args::VerifyArgs;
use crate::error::{Result, VercheckError};
use crate::ui::UserInterface;

use super::dispatcher::{
    Command, CommandContext, CommandResult, EXIT_ERROR, EXIT_NEEDS_INSTALL,
};
use super::display;

/// The verify command implementation.
pub struct VerifyCommand {
    context: CommandContext,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(context: CommandContext, args: VerifyArgs) -> Self {
        Self { context, args }
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match self.context.load_config(true) {
            Ok(c) => c,
            Err(VercheckError::ConfigNotFound { path }) => {
                ui.error(&format!("No manifest found at {}", path.display()));
                return Ok(CommandResult::failure(EXIT_ERROR));
            }
            Err(e) => return Err(e),
        };

        let checker = VersionChecker::new(self.context.resolver(&config));
        let outcomes = checker.check_all(
            config
                .requirements
                .iter()
                .map(|(module, required)| (module.as_str(), required.as_str())),
        );

        if self.args.json {
            let values = outcomes
                .iter()
                .map(display::outcome_json)
                .collect::<Result<Vec<_>>>()?;
            let text = serde_json::to_string_pretty(&values).map_err(anyhow::Error::from)?;
            ui.output(&text);
        } else if outcomes.is_empty() {
            ui.warning("No requirements declared");
        } else {
            for outcome in &outcomes {
                display::show_outcome(ui, outcome);
            }
        }

        let errors = outcomes.iter().filter(|o| o.result.is_err()).count();
        let needed = outcomes
            .iter()
            .filter(|o| matches!(&o.result, Ok(c) if c.needs_install))
            .count();
        tracing::debug!(total = outcomes.len(), needed, errors, "verify finished");

        if errors > 0 {
            Ok(CommandResult::failure(EXIT_ERROR))
        } else if needed > 0 {
            Ok(CommandResult::failure(EXIT_NEEDS_INSTALL))
        } else {
            Ok(CommandResult::success())
        }
    }
}
