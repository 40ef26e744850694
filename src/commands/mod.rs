//! Built-in commands.
//!
//! This module provides the command infrastructure:
//! - [`Command`] trait every subcommand implements
//! - [`Outcome`] telling the shell loop whether to keep reading
//! - [`builtins`], the closed set of commands registered at startup
//!
//! Commands are stateless except [`RmCommand`], which holds the configured
//! trash store.

mod cat;
mod cd;
mod cp;
mod exit;
mod ls;
mod mv;
mod pwd;
mod rm;

pub use cat::CatCommand;
pub use cd::CdCommand;
pub use cp::CpCommand;
pub use exit::ExitCommand;
pub use ls::LsCommand;
pub use mv::MvCommand;
pub use pwd::PwdCommand;
pub use rm::RmCommand;

use std::collections::HashSet;

use crate::error::{Result, ShellError};
use crate::trash::Trash;
use crate::ui::UserInterface;

/// What the shell loop should do after a command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input.
    Continue,
    /// Terminate the loop cleanly.
    Exit,
}

/// Trait for command implementations.
pub trait Command {
    /// The stable name the command is registered and invoked under.
    fn name(&self) -> &str;

    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `args` - Positional arguments, in input order
    /// * `flags` - Single-character flags present on the line
    /// * `ui` - User interface for output and confirmation prompts
    fn execute(
        &self,
        args: &[String],
        flags: &HashSet<char>,
        ui: &mut dyn UserInterface,
    ) -> Result<Outcome>;
}

/// All builtin command instances, in registration order.
pub fn builtins(trash: Trash) -> Vec<Box<dyn Command>> {
    vec![
        Box::new(LsCommand),
        Box::new(CdCommand),
        Box::new(CpCommand),
        Box::new(MvCommand),
        Box::new(RmCommand::new(trash)),
        Box::new(CatCommand),
        Box::new(PwdCommand),
        Box::new(ExitCommand),
    ]
}

/// Fail with a `Syntax` error unless exactly `count` arguments were given.
pub(crate) fn require_exactly(command: &str, args: &[String], count: usize) -> Result<()> {
    if args.len() > count {
        Err(ShellError::syntax(
            command,
            "given more arguments than required",
        ))
    } else if args.len() < count {
        Err(ShellError::syntax(
            command,
            "given less arguments than required",
        ))
    } else {
        Ok(())
    }
}

/// Fail with a `Syntax` error when more than `max` arguments were given.
pub(crate) fn require_at_most(command: &str, args: &[String], max: usize) -> Result<()> {
    if args.len() > max {
        Err(ShellError::syntax(
            command,
            "given more arguments than required",
        ))
    } else {
        Ok(())
    }
}
