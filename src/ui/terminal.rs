//! Terminal UI writing to the standard streams.

use super::theme::VercheckTheme;
use super::UserInterface;

/// UI implementation for a real terminal.
///
/// Results and status lines go to stdout; errors go to stderr so piped output
/// stays clean.
#[derive(Debug, Clone)]
pub struct TerminalUI {
    theme: VercheckTheme,
}

impl TerminalUI {
    /// Create a terminal UI, colored when `colors` is set.
    pub fn new(colors: bool) -> Self {
        Self {
            theme: VercheckTheme::for_colors(colors),
        }
    }
}

impl UserInterface for TerminalUI {
    fn output(&mut self, text: &str) {
        println!("{}", text);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }
}
