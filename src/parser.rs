//! Input line parsing.
//!
//! Converts one raw input line into a structured [`Invocation`]: a command
//! name, positional arguments in order, and a set of single-character flags.
//! Parsing never fails; an empty or whitespace-only line yields an empty
//! invocation the dispatcher treats as a no-op.

use std::collections::HashSet;

/// The character that introduces a flag token.
pub const FLAG_MARKER: char = '-';

/// A parsed command invocation.
///
/// Produced fresh from each input line and consumed once by dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// The command name: the first token of the line, verbatim.
    pub name: String,
    /// Positional arguments, in the order they appeared.
    pub args: Vec<String>,
    /// Single-character flags collected from `-`-prefixed tokens.
    pub flags: HashSet<char>,
}

impl Invocation {
    /// Whether the line contained no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Whether the given flag was present.
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(&flag)
    }
}

/// A raw token together with whether any part of it was quoted.
#[derive(Debug)]
struct Token {
    text: String,
    quoted: bool,
}

/// Parse one raw input line into an [`Invocation`].
///
/// The first token is always the command name, even if it begins with the
/// flag marker. Each later unquoted token starting with `-` contributes its
/// remaining characters individually to the flag set (`-rf` yields `r` and
/// `f`); a bare `-` contributes nothing. Quoted tokens are always positional
/// arguments, with the quotes stripped.
pub fn parse(line: &str) -> Invocation {
    let mut tokens = tokenize(line).into_iter();

    let Some(first) = tokens.next() else {
        return Invocation::default();
    };

    let mut invocation = Invocation {
        name: first.text,
        ..Invocation::default()
    };

    for token in tokens {
        if !token.quoted && token.text.starts_with(FLAG_MARKER) {
            invocation.flags.extend(token.text.chars().skip(1));
        } else {
            invocation.args.push(token.text);
        }
    }

    invocation
}

/// Split a line into whitespace-delimited tokens, grouping single- or
/// double-quoted regions. An unterminated quote extends to the end of the
/// line.
fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_token = false;

    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                in_token = true;
                quoted = true;
                for inner in chars.by_ref() {
                    if inner == c {
                        break;
                    }
                    current.push(inner);
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(Token {
                        text: std::mem::take(&mut current),
                        quoted,
                    });
                    quoted = false;
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }

    if in_token {
        tokens.push(Token {
            text: current,
            quoted,
        });
    }

    tokens
}
