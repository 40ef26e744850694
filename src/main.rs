//! Scree CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use scree::cli::Cli;
use scree::core::ShellCore;
use scree::logging;
use scree::trash::Trash;
use scree::ui::TerminalUI;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    if let Err(e) = logging::init(&cli.resolve_log_file(), cli.debug) {
        eprintln!("Error: {}", e);
        return ExitCode::from(1);
    }

    tracing::debug!("scree starting with args: {:?}", cli);

    let core = ShellCore::with_builtins(Trash::new(cli.resolve_trash_dir()));
    let mut ui = TerminalUI::new();

    match core.run(&mut ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
