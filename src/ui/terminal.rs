//! Interactive terminal UI.

use std::io::{self, IsTerminal, Write};

use console::{style, Term};

use crate::error::Result;
use crate::input::{self, ReadLine};

use super::UserInterface;

/// Terminal UI implementation.
///
/// Writes through a [`Term`] handle; failures are styled red when colors are
/// enabled. Confirmation answers are read from the shared input source so
/// they stay in step with the command-line reads.
pub struct TerminalUI {
    term: Term,
    colors: bool,
    interactive: bool,
}

impl TerminalUI {
    /// Create a terminal UI, detecting color support and interactivity.
    pub fn new() -> Self {
        let colors = console::colors_enabled() && std::env::var_os("NO_COLOR").is_none();
        Self {
            term: Term::stdout(),
            colors,
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn print(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        if self.colors {
            writeln!(self.term, "{}", style(msg).red()).ok();
        } else {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn show_prompt(&mut self, prompt: &str) {
        write!(self.term, "{} ", prompt).ok();
        self.term.flush().ok();
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        write!(self.term, "{}", question).ok();
        self.term.flush().ok();
        match input::read_line()? {
            ReadLine::Line(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
            ReadLine::Eof | ReadLine::Interrupted => Ok(false),
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}
