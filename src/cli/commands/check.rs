//! Check command implementation.
//!
//! The `vercheck check <MODULE> <REQUIRED>` command prints whether one
//! module needs installing: `true` or `false`.

use crate::checker::VersionChecker;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_NEEDS_INSTALL};

/// The check command implementation.
pub struct CheckCommand {
    context: CommandContext,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(context: CommandContext, args: CheckArgs) -> Self {
        Self { context, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // The manifest is optional here; it only contributes registry entries.
        let config = self.context.load_config(false)?;
        let checker = VersionChecker::new(self.context.resolver(&config));

        let check = checker.inspect(&self.args.module, &self.args.required)?;

        if self.args.json {
            let text = serde_json::to_string_pretty(&check).map_err(anyhow::Error::from)?;
            ui.output(&text);
        } else {
            ui.output(if check.needs_install { "true" } else { "false" });
        }

        if check.needs_install && self.args.exit_code {
            return Ok(CommandResult::failure(EXIT_NEEDS_INSTALL));
        }
        Ok(CommandResult::success())
    }
}
