//! `rm` - relocate files and directories into the trash.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, ShellError};
use crate::fsops;
use crate::trash::Trash;
use crate::ui::UserInterface;

use super::{require_exactly, Command, Outcome};

/// Moves the target into the trash instead of deleting it.
///
/// Directories require the `r` flag, which asks for confirmation first;
/// any answer other than `y`/`Y` cancels and leaves the target untouched.
pub struct RmCommand {
    trash: Trash,
}

impl RmCommand {
    /// Create an `rm` command backed by the given trash store.
    pub fn new(trash: Trash) -> Self {
        Self { trash }
    }
}

impl Command for RmCommand {
    fn name(&self) -> &str {
        "rm"
    }

    fn execute(
        &self,
        args: &[String],
        flags: &HashSet<char>,
        ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        require_exactly(self.name(), args, 1)?;

        let path = Path::new(&args[0]);

        if flags.contains(&'r') {
            if !path.exists() {
                return Err(ShellError::not_found(self.name(), path));
            }
            let question = format!(
                "{}: are you sure you want to delete {}: [Y/N]: ",
                self.name(),
                fsops::display_name(path)
            );
            if ui.confirm(&question)? {
                self.trash.put(path)?;
            }
        } else {
            if !path.exists() {
                return Err(ShellError::not_found(self.name(), path));
            }
            if !path.is_file() {
                return Err(ShellError::is_a_directory(self.name(), path));
            }
            self.trash.put(path)?;
        }

        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn command(temp: &TempDir) -> RmCommand {
        RmCommand::new(Trash::new(temp.path().join(".trash")))
    }

    fn run(cmd: &RmCommand, args: &[&str], flags: &[char], ui: &mut MockUI) -> Result<Outcome> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let flags: HashSet<char> = flags.iter().copied().collect();
        cmd.execute(&args, &flags, ui)
    }

    #[test]
    fn file_is_relocated_into_trash() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let file = temp.path().join("a.txt");
        fs::write(&file, "contents").unwrap();

        run(&cmd, &[file.to_str().unwrap()], &[], &mut MockUI::new()).unwrap();

        assert!(!file.exists());
        assert_eq!(
            fs::read_to_string(temp.path().join(".trash/a.txt")).unwrap(),
            "contents"
        );
    }

    #[test]
    fn directory_without_flag_is_rejected() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let dir = temp.path().join("somedir");
        fs::create_dir(&dir).unwrap();

        let err = run(&cmd, &[dir.to_str().unwrap()], &[], &mut MockUI::new()).unwrap_err();
        assert_eq!(err.to_string(), "rm: somedir: is a directory");
        assert!(dir.exists());
    }

    #[test]
    fn missing_target_is_not_found() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);

        let err = run(&cmd, &["missing.txt"], &[], &mut MockUI::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rm: no such file or directory: missing.txt"
        );
    }

    #[test]
    fn recursive_removal_asks_before_acting() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let dir = temp.path().join("somedir");
        fs::create_dir(&dir).unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm_response("y");
        run(&cmd, &[dir.to_str().unwrap()], &['r'], &mut ui).unwrap();

        assert!(!dir.exists());
        assert!(temp.path().join(".trash/somedir").exists());
        assert_eq!(
            ui.questions(),
            ["rm: are you sure you want to delete somedir: [Y/N]: "]
        );
    }

    #[test]
    fn declined_confirmation_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let dir = temp.path().join("somedir");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("sub/f.txt"), "x").unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm_response("n");
        run(&cmd, &[dir.to_str().unwrap()], &['r'], &mut ui).unwrap();

        assert!(dir.join("sub/f.txt").exists());
        assert!(!temp.path().join(".trash/somedir").exists());
    }

    #[test]
    fn missing_confirmation_input_cancels() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let dir = temp.path().join("somedir");
        fs::create_dir(&dir).unwrap();

        // no queued response: the prompt sees end of input
        run(&cmd, &[dir.to_str().unwrap()], &['r'], &mut MockUI::new()).unwrap();

        assert!(dir.exists());
    }

    #[test]
    fn recursive_flag_works_on_files_too() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let file = temp.path().join("a.txt");
        fs::write(&file, "").unwrap();

        let mut ui = MockUI::new();
        ui.queue_confirm_response("Y");
        run(&cmd, &[file.to_str().unwrap()], &['r'], &mut ui).unwrap();

        assert!(!file.exists());
        assert!(temp.path().join(".trash/a.txt").exists());
    }

    #[test]
    fn two_arguments_are_a_syntax_error() {
        let temp = TempDir::new().unwrap();
        let cmd = command(&temp);
        let err = run(&cmd, &["a", "b"], &[], &mut MockUI::new()).unwrap_err();
        assert_eq!(err.to_string(), "rm: given more arguments than required");
    }
}
