//! Shell core: the command registry, dispatch, and the read loop.
//!
//! The registry is built once at startup from the closed builtin set and is
//! read-only afterwards. Dispatch parses each line, records it to the audit
//! log, and routes it to the matching command; usage failures are reported
//! and the loop keeps reading, anything else propagates and ends the
//! session.

use std::collections::HashMap;

use crate::commands::{self, Command, Outcome};
use crate::error::{Result, ShellError};
use crate::input::{self, ReadLine};
use crate::parser;
use crate::prompt;
use crate::trash::Trash;
use crate::ui::UserInterface;

/// The command registry and read loop.
pub struct ShellCore {
    commands: HashMap<String, Box<dyn Command>>,
}

impl ShellCore {
    /// Create an empty core with no registered commands.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create a core with the full builtin command set registered.
    pub fn with_builtins(trash: Trash) -> Self {
        let mut core = Self::new();
        for command in commands::builtins(trash) {
            core.register(command);
        }
        core
    }

    /// Register a command, replacing any existing command with the same name.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.name().to_string(), command);
    }

    /// The names of all registered commands.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(String::as_str).collect()
    }

    /// Parse one raw input line and execute the matching command.
    ///
    /// An empty line is a no-op: a blank output line, no log entry. Every
    /// other line is recorded to the audit log, trimmed of its trailing
    /// terminator, before the command runs.
    pub fn dispatch(&self, line: &str, ui: &mut dyn UserInterface) -> Result<Outcome> {
        let invocation = parser::parse(line);

        if invocation.is_empty() {
            ui.print("");
            return Ok(Outcome::Continue);
        }

        tracing::info!("{}", line.trim_end_matches(['\n', '\r']));

        match self.commands.get(&invocation.name) {
            Some(command) => command.execute(&invocation.args, &invocation.flags, ui),
            None => Err(ShellError::unknown_command(&invocation.name)),
        }
    }

    /// Run the read-parse-dispatch loop until `exit`, end of input, or an
    /// interrupt.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        input::install_interrupt_handler();

        loop {
            if input::interrupt_pending() {
                tracing::info!("exit");
                return Ok(());
            }

            if ui.is_interactive() {
                ui.show_prompt(&prompt::render());
            }

            match input::read_line()? {
                ReadLine::Eof => return Ok(()),
                ReadLine::Interrupted => {
                    tracing::info!("exit");
                    return Ok(());
                }
                ReadLine::Line(line) => match self.dispatch(&line, ui) {
                    Ok(Outcome::Exit) => return Ok(()),
                    Ok(Outcome::Continue) => {}
                    Err(err) if err.is_usage_error() => {
                        ui.error(&err.to_string());
                        tracing::error!("{}", err);
                    }
                    Err(err) => return Err(err),
                },
            }
        }
    }
}

impl Default for ShellCore {
    fn default() -> Self {
        Self::new()
    }
}
