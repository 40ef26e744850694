//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The program has no
//! subcommands; it always runs the shell loop.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Scree - interactive filesystem shell with trash-backed deletion.
#[derive(Debug, Parser)]
#[command(name = "scree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Trash directory for removed entries (default: .trash next to the executable)
    #[arg(long)]
    pub trash_dir: Option<PathBuf>,

    /// Log file path (default: scree.log next to the executable)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// The trash directory, defaulting next to the executable.
    pub fn resolve_trash_dir(&self) -> PathBuf {
        self.trash_dir
            .clone()
            .unwrap_or_else(|| install_root().join(".trash"))
    }

    /// The log file, defaulting next to the executable.
    pub fn resolve_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| install_root().join("scree.log"))
    }
}

/// The directory the executable lives in, falling back to the working
/// directory when it cannot be determined.
fn install_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
