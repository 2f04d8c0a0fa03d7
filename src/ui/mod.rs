//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - Display formatting for paths and timestamps

pub mod display;
pub mod mock;
pub mod terminal;
pub mod theme;

pub use display::{display_path, format_relative_time};
pub use mock::MockUI;
pub use terminal::{create_ui, NonInteractiveUI, TerminalUI};
pub use theme::{should_use_colors, CairnTheme};

use crate::error::Result;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including diagnostics.
    Verbose,
    /// Show normal status messages.
    #[default]
    Normal,
    /// Show minimal output (errors and bare values only).
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. Non-interactive implementations return
    /// the default without prompting.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_status() {
        assert!(!OutputMode::Quiet.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(OutputMode::Verbose.shows_status());
    }

    #[test]
    fn default_mode_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
