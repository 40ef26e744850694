//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive and piped terminal usage
//! - [`MockUI`] for tests
//! - [`Table`] for the aligned listing produced by `ls -l`

pub mod mock;
pub mod table;
pub mod terminal;

pub use mock::MockUI;
pub use table::Table;
pub use terminal::TerminalUI;

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Write a line of command output.
    fn print(&mut self, msg: &str);

    /// Write a failure line. Failures share the output stream with results.
    fn error(&mut self, msg: &str);

    /// Write the shell prompt, without a trailing newline.
    fn show_prompt(&mut self, prompt: &str);

    /// Ask a yes/no question; `y` or `Y` confirms, anything else declines.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Whether stdin is attached to a terminal.
    fn is_interactive(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_satisfies_the_trait() {
        fn takes_ui(_ui: &mut dyn UserInterface) {}
        let mut ui = MockUI::new();
        takes_ui(&mut ui);
    }
}
