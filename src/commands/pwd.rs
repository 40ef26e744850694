//! `pwd` - print the working directory.

use std::collections::HashSet;
use std::env;

use crate::error::Result;
use crate::ui::UserInterface;

use super::{Command, Outcome};

/// Prints the ambient working directory.
pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &str {
        "pwd"
    }

    fn execute(
        &self,
        _args: &[String],
        _flags: &HashSet<char>,
        ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        ui.print(&env::current_dir()?.display().to_string());
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn prints_the_current_directory() {
        let mut ui = MockUI::new();
        PwdCommand
            .execute(&[], &HashSet::new(), &mut ui)
            .unwrap();

        let expected = env::current_dir().unwrap().display().to_string();
        assert_eq!(ui.printed(), [expected]);
    }

    #[test]
    fn repeated_calls_agree() {
        let mut ui = MockUI::new();
        PwdCommand.execute(&[], &HashSet::new(), &mut ui).unwrap();
        PwdCommand.execute(&[], &HashSet::new(), &mut ui).unwrap();
        assert_eq!(ui.printed()[0], ui.printed()[1]);
    }
}
