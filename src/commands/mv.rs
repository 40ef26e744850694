//! `mv` - move files and directories.

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, ShellError};
use crate::fsops;
use crate::ui::UserInterface;

use super::{require_exactly, Command, Outcome};

/// Relocates the source under an existing destination.
///
/// The destination must already exist; a directory destination receives the
/// source under its basename, a file destination is replaced.
pub struct MvCommand;

impl Command for MvCommand {
    fn name(&self) -> &str {
        "mv"
    }

    fn execute(
        &self,
        args: &[String],
        _flags: &HashSet<char>,
        _ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        require_exactly(self.name(), args, 2)?;

        let src = Path::new(&args[0]);
        let dst = Path::new(&args[1]);

        if !src.exists() {
            return Err(ShellError::not_found(self.name(), src));
        }
        if !dst.exists() {
            return Err(ShellError::not_found(self.name(), dst));
        }

        fsops::move_into(src, dst)?;
        Ok(Outcome::Continue)
    }
}
