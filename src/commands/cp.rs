//! `cp` - copy files and directories.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, ShellError};
use crate::fsops;
use crate::ui::UserInterface;

use super::{require_exactly, Command, Outcome};

/// Copies a file, or a whole tree with the `r` flag.
///
/// Recursive copies land under `destination/<source-basename>` and merge
/// with an existing tree instead of failing.
pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &str {
        "cp"
    }

    fn execute(
        &self,
        args: &[String],
        flags: &HashSet<char>,
        _ui: &mut dyn UserInterface,
    ) -> Result<Outcome> {
        require_exactly(self.name(), args, 2)?;

        let src = Path::new(&args[0]);
        let dst = Path::new(&args[1]);

        if flags.contains(&'r') {
            if !src.exists() {
                return Err(ShellError::not_found(self.name(), src));
            }
            let target = dst.join(fsops::base_name(src)?);
            if src.is_dir() {
                fsops::copy_dir_recursive(src, &target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(src, &target)?;
            }
        } else {
            if !src.exists() {
                return Err(ShellError::not_found(self.name(), src));
            }
            if !src.is_file() {
                return Err(ShellError::is_a_directory(self.name(), src));
            }
            let target = if dst.is_dir() {
                dst.join(fsops::base_name(src)?)
            } else {
                dst.to_path_buf()
            };
            fs::copy(src, &target)?;
        }

        Ok(Outcome::Continue)
    }
}
