//! `cat` - print file contents.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Result, ShellError};
use crate::ui::UserInterface;

use super::{require_exactly, Command, Outcome};

/// Writes the full contents of one file to the output.
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &str {
        "cat"
    }

    fn execute(
        &self,
        args: &[String],
        _flags: &HashSet<char>,
        ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        require_exactly(self.name(), args, 1)?;

        let path = Path::new(&args[0]);
        if !path.exists() {
            return Err(ShellError::not_found(self.name(), path));
        }

        let mut file = File::open(path).map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => ShellError::permission_denied(self.name()),
            _ => ShellError::Io(err),
        })?;

        if file.metadata()?.is_dir() {
            return Err(ShellError::not_a_file(self.name(), path));
        }

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        ui.print(&String::from_utf8_lossy(&bytes));

        Ok(Outcome::Continue)
    }
}
