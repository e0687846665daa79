//! Parse command implementation.
//!
//! The `vercheck parse` command prints the integer segments of a version.

use crate::cli::args::ParseArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::parse_version;

use super::dispatcher::{Command, CommandResult};

/// The parse command implementation.
pub struct ParseCommand {
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(args: ParseArgs) -> Self {
        Self { args }
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = parse_version(&self.args.version)?;

        let text = if self.args.json {
            serde_json::to_string(version.segments()).map_err(anyhow::Error::from)?
        } else {
            version
                .segments()
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        };
        ui.output(&text);

        Ok(CommandResult::success())
    }
}
