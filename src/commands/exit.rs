//! `exit` - leave the shell.

use std::collections::HashSet;

use crate::error::Result;
use crate::ui::UserInterface;

use super::{Command, Outcome};

/// Signals the shell loop to terminate.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &str {
        "exit"
    }

    fn execute(
        &self,
        _args: &[String],
        _flags: &HashSet<char>,
        _ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        Ok(Outcome::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn signals_exit() {
        let outcome = ExitCommand
            .execute(&[], &HashSet::new(), &mut MockUI::new())
            .unwrap();
        assert_eq!(outcome, Outcome::Exit);
    }
}
