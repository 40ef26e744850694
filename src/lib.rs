//! Scree - an interactive filesystem shell with trash-backed deletion.
//!
//! Scree reads command lines from standard input and dispatches them to a
//! fixed set of filesystem commands (`ls`, `cd`, `cp`, `mv`, `rm`, `cat`,
//! `pwd`, `exit`). Removal is non-destructive: `rm` relocates entries into a
//! configured trash directory, together with a sidecar recording where each
//! entry came from. Every dispatched line and every failure is appended to a
//! log file.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`commands`] - Built-in commands and the command contract
//! - [`core`] - Command registry, dispatch, and the read loop
//! - [`error`] - Error types and result aliases
//! - [`fsops`] - Copy/move helpers and permission formatting
//! - [`input`] - Line-based input source
//! - [`logging`] - File logging setup
//! - [`parser`] - Input line parsing
//! - [`prompt`] - Interactive prompt string
//! - [`trash`] - Trash store backing `rm`
//! - [`ui`] - Terminal output, confirmation prompts, and tables
//!
//! # Example
//!
//! ```
//! use scree::parser;
//!
//! let invocation = parser::parse("ls /tmp -l\n");
//! assert_eq!(invocation.name, "ls");
//! assert_eq!(invocation.args, vec!["/tmp"]);
//! assert!(invocation.has_flag('l'));
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fsops;
pub mod input;
pub mod logging;
pub mod parser;
pub mod prompt;
pub mod trash;
pub mod ui;

pub use error::{Result, ShellError};
