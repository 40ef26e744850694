//! `cd` - change the working directory.

use std::collections::HashSet;
use std::env;
use std::path::Path;

use anyhow::anyhow;

use crate::error::{Result, ShellError};
use crate::ui::UserInterface;

use super::{require_at_most, Command, Outcome};

/// Changes the ambient working directory; the only command that writes it.
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &str {
        "cd"
    }

    fn execute(
        &self,
        args: &[String],
        _flags: &HashSet<char>,
        _ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        require_at_most(self.name(), args, 1)?;

        match args.first().map(String::as_str) {
            None | Some("~") => {
                let home =
                    dirs::home_dir().ok_or_else(|| anyhow!("home directory is not known"))?;
                env::set_current_dir(home)?;
            }
            Some(arg) => {
                let path = Path::new(arg);
                if !path.exists() {
                    return Err(ShellError::not_found(self.name(), path));
                }
                if path.is_file() {
                    return Err(ShellError::not_a_directory(self.name(), path));
                }
                env::set_current_dir(path)?;
            }
        }

        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(args: &[&str], ui: &mut MockUI) -> Result<Outcome> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        CdCommand.execute(&args, &HashSet::new(), ui)
    }

    #[test]
    fn missing_directory_is_not_found() {
        let mut ui = MockUI::new();
        let err = run(&["nonexistent_dir"], &mut ui).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cd: no such file or directory: nonexistent_dir"
        );
    }

    #[test]
    fn file_target_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();

        let mut ui = MockUI::new();
        let err = run(&[file.to_str().unwrap()], &mut ui).unwrap_err();
        assert_eq!(err.to_string(), "cd: not a directory: plain.txt");
    }

    #[test]
    fn two_arguments_are_a_syntax_error() {
        let mut ui = MockUI::new();
        let err = run(&["a", "b"], &mut ui).unwrap_err();
        assert_eq!(err.to_string(), "cd: given more arguments than required");
    }
}
