//! Shared display helpers for install-check results.
//!
//! Used by `check` and `verify` so both render decisions the same way.

use serde_json::{json, Value};

use crate::checker::{CheckOutcome, InstallCheck};
use crate::error::Result;
use crate::ui::UserInterface;

/// One-line summary of a decision, without styling.
pub fn describe(check: &InstallCheck) -> String {
    match (&check.installed, check.needs_install) {
        (None, _) => format!("{} not installed (requires {})", check.module, check.required),
        (Some(installed), true) => format!(
            "{} {} is older than required {}",
            check.module, installed, check.required
        ),
        (Some(installed), false) => format!(
            "{} {} satisfies {}",
            check.module, installed, check.required
        ),
    }
}

/// Print a batch outcome, styled by severity.
pub fn show_outcome(ui: &mut dyn UserInterface, outcome: &CheckOutcome) {
    match &outcome.result {
        Ok(check) if check.needs_install => ui.warning(&describe(check)),
        Ok(check) => ui.success(&describe(check)),
        Err(e) => ui.error(&format!("{}: {}", outcome.module, e)),
    }
}

/// JSON form of a batch outcome; errors become an `error` field.
pub fn outcome_json(outcome: &CheckOutcome) -> Result<Value> {
    let value = match &outcome.result {
        Ok(check) => serde_json::to_value(check).map_err(anyhow::Error::from)?,
        Err(e) => json!({
            "module": outcome.module,
            "required": outcome.required,
            "error": e.to_string(),
        }),
    };
    Ok(value)
}
