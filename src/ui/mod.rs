//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//! - [`VercheckTheme`] styling
//!
//! # Example
//!
//! ```
//! use vercheck::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("git 2.39.2");
//! assert_eq!(ui.successes(), &["git 2.39.2".to_string()]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, VercheckTheme};

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Print raw output, e.g. a result meant for scripts.
    fn output(&mut self, text: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
