//! `ls` - list directory contents.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};

use crate::error::{Result, ShellError};
use crate::fsops;
use crate::ui::{Table, UserInterface};

use super::{require_at_most, Command, Outcome};

/// Lists a directory, plainly or as a detailed table with the `l` flag.
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &str {
        "ls"
    }

    fn execute(
        &self,
        args: &[String],
        flags: &HashSet<char>,
        ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        require_at_most(self.name(), args, 1)?;

        let path = match args.first() {
            Some(arg) => Path::new(arg),
            None => Path::new("."),
        };

        if !path.exists() {
            return Err(ShellError::not_found(self.name(), path));
        }
        if path.is_file() {
            return Err(ShellError::not_a_directory(self.name(), path));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();

        if flags.contains(&'l') {
            let mut table = Table::new(vec![
                "File name",
                "File size",
                "Last change time",
                "Permissions",
            ]);
            for name in &names {
                let meta = fs::metadata(path.join(name))?;
                let modified: DateTime<Local> = meta.modified()?.into();
                table.add_row(vec![
                    name.clone(),
                    meta.len().to_string(),
                    modified.format("%d.%m.%y %H:%M").to_string(),
                    fsops::permissions_string(&meta),
                ]);
            }
            ui.print(&table.render());
        } else {
            ui.print(&names.join("\n"));
        }

        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    fn run(args: &[&str], flags: &[char], ui: &mut MockUI) -> Result<Outcome> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let flags: HashSet<char> = flags.iter().copied().collect();
        LsCommand.execute(&args, &flags, ui)
    }

    #[test]
    fn lists_entries_sorted_by_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "").unwrap();
        fs::write(temp.path().join("a.txt"), "").unwrap();

        let mut ui = MockUI::new();
        run(&[temp.path().to_str().unwrap()], &[], &mut ui).unwrap();

        assert_eq!(ui.output(), "a.txt\nb.txt");
    }

    #[test]
    fn long_listing_renders_header_and_sizes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "0123456789").unwrap();

        let mut ui = MockUI::new();
        run(&[temp.path().to_str().unwrap()], &['l'], &mut ui).unwrap();

        let output = ui.output();
        let mut lines = output.lines();
        assert!(lines
            .next()
            .unwrap()
            .starts_with("File name File size Last change time Permissions"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("a.txt"));
        assert!(row.contains("10"));
    }

    #[test]
    fn missing_path_is_not_found() {
        let mut ui = MockUI::new();
        let err = run(&["definitely_missing"], &[], &mut ui).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ls: no such file or directory: definitely_missing"
        );
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        let mut ui = MockUI::new();
        let err = run(&[file.to_str().unwrap()], &[], &mut ui).unwrap_err();
        assert_eq!(err.to_string(), "ls: not a directory: plain.txt");
    }

    #[test]
    fn two_arguments_are_a_syntax_error() {
        let mut ui = MockUI::new();
        let err = run(&["a", "b"], &[], &mut ui).unwrap_err();
        assert_eq!(err.to_string(), "ls: given more arguments than required");
    }
}
