//! Error types for scree operations.
//!
//! This module defines [`ShellError`], the primary error type used throughout
//! the shell, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The usage variants (`Syntax` through `UnknownCommand`) are expected
//!   outcomes of ordinary input: the shell loop prints them and keeps reading
//! - `Io` and `Other` signal unexpected host faults and terminate the session
//! - Every usage message is prefixed with the name of the command that raised
//!   it, so the same underlying condition reads differently per command

use std::path::Path;

use thiserror::Error;

use crate::fsops::display_name;

/// Core error type for shell operations.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Wrong argument count or otherwise malformed invocation.
    #[error("{command}: {message}")]
    Syntax { command: String, message: String },

    /// Referenced path does not exist.
    #[error("{command}: no such file or directory: {path}")]
    NotFound { command: String, path: String },

    /// Path exists but names a file where a directory is required.
    #[error("{command}: not a directory: {path}")]
    NotADirectory { command: String, path: String },

    /// Path exists but names a directory where a file is required.
    #[error("{command}: not a file: {path}")]
    NotAFile { command: String, path: String },

    /// Path names a directory and the operation only accepts files.
    #[error("{command}: {path}: is a directory")]
    IsADirectory { command: String, path: String },

    /// Caller lacks the access rights the operation needs.
    #[error("{command}: access denied")]
    PermissionDenied { command: String },

    /// No registered command matches the parsed name.
    #[error("{command}: unknown command")]
    UnknownCommand { command: String },

    /// Unexpected IO fault.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShellError {
    /// Build a [`ShellError::Syntax`] for the given command.
    pub fn syntax(command: &str, message: &str) -> Self {
        Self::Syntax {
            command: command.to_string(),
            message: message.to_string(),
        }
    }

    /// Build a [`ShellError::NotFound`] naming the path's final component.
    pub fn not_found(command: &str, path: &Path) -> Self {
        Self::NotFound {
            command: command.to_string(),
            path: display_name(path),
        }
    }

    /// Build a [`ShellError::NotADirectory`] naming the path's final component.
    pub fn not_a_directory(command: &str, path: &Path) -> Self {
        Self::NotADirectory {
            command: command.to_string(),
            path: display_name(path),
        }
    }

    /// Build a [`ShellError::NotAFile`] naming the path's final component.
    pub fn not_a_file(command: &str, path: &Path) -> Self {
        Self::NotAFile {
            command: command.to_string(),
            path: display_name(path),
        }
    }

    /// Build a [`ShellError::IsADirectory`] naming the path's final component.
    pub fn is_a_directory(command: &str, path: &Path) -> Self {
        Self::IsADirectory {
            command: command.to_string(),
            path: display_name(path),
        }
    }

    /// Build a [`ShellError::PermissionDenied`] for the given command.
    pub fn permission_denied(command: &str) -> Self {
        Self::PermissionDenied {
            command: command.to_string(),
        }
    }

    /// Build a [`ShellError::UnknownCommand`] for the unmatched name.
    pub fn unknown_command(name: &str) -> Self {
        Self::UnknownCommand {
            command: name.to_string(),
        }
    }

    /// Whether this failure is an expected usage error.
    ///
    /// Usage errors are printed and the loop continues; anything else
    /// propagates and terminates the session.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Other(_))
    }
}

/// Result type alias for shell operations.
pub type Result<T> = std::result::Result<T, ShellError>;
