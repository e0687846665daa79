//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    outputs: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured raw outputs.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl UserInterface for MockUI {
    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_kind_separately() {
        let mut ui = MockUI::new();
        ui.output("true");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");

        assert_eq!(ui.outputs(), &["true".to_string()]);
        assert_eq!(ui.successes(), &["ok".to_string()]);
        assert_eq!(ui.warnings(), &["careful".to_string()]);
        assert_eq!(ui.errors(), &["bad".to_string()]);
    }

    #[test]
    fn starts_empty() {
        let ui = MockUI::new();
        assert!(ui.outputs().is_empty());
        assert!(ui.errors().is_empty());
    }
}
