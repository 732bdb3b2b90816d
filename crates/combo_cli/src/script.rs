//! Event scripts
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//! A `#` after whitespace starts a trailing comment, except on `type` lines:
//! everything after `type` and its single separator is typed as written,
//! including spaces and `#`.
//!
//! ```text
//! type mi
//! backspace        # remove the last character
//! key down list    # key press, source defaults to list
//! hover 2          # pointer enters row 2
//! click 2          # row 2 clicked
//! add 2            # add affordance of row 2 clicked
//! clear            # clear control clicked
//! ```

use std::fmt;

use combo_core::{EventSource, Key};
use thiserror::Error;

/// Script parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' expects {expected}")]
    MissingArgument {
        line: usize,
        command: String,
        expected: &'static str,
    },

    #[error("line {line}: invalid row index '{value}'")]
    InvalidIndex { line: usize, value: String },

    #[error("line {line}: unknown key '{key}'")]
    UnknownKey { line: usize, key: String },

    #[error("line {line}: unknown event source '{source_name}' (expected field or list)")]
    UnknownSource { line: usize, source_name: String },
}

/// A single scripted user action
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Type(String),
    Backspace,
    Key { key: Key, source: EventSource },
    Hover(usize),
    Click(usize),
    Add(usize),
    Clear,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Type(text) => write!(f, "type {}", text),
            Command::Backspace => f.write_str("backspace"),
            Command::Key { key, source } => {
                let source = match source {
                    EventSource::Field => "field",
                    EventSource::List => "list",
                };
                write!(f, "key {:?} {}", key, source)
            }
            Command::Hover(index) => write!(f, "hover {}", index),
            Command::Click(index) => write!(f, "click {}", index),
            Command::Add(index) => write!(f, "add {}", index),
            Command::Clear => f.write_str("clear"),
        }
    }
}

/// Parse a whole script
pub fn parse_script(text: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (number, raw) in text.lines().enumerate() {
        if let Some(command) = parse_line(raw, number + 1)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse one line; `None` for blank lines and comments
pub fn parse_line(raw: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let content = raw.trim_start();
    if content.is_empty() || content.starts_with('#') {
        return Ok(None);
    }

    let (name, rest) = match content.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (content, ""),
    };

    if name == "type" {
        if rest.is_empty() {
            return Err(missing(line, name, "text"));
        }
        return Ok(Some(Command::Type(rest.to_string())));
    }

    let rest = strip_comment(rest).trim();
    let command = match name {
        "backspace" => Command::Backspace,
        "clear" => Command::Clear,
        "hover" => Command::Hover(parse_index(line, name, rest)?),
        "click" => Command::Click(parse_index(line, name, rest)?),
        "add" => Command::Add(parse_index(line, name, rest)?),
        "key" => {
            let mut parts = rest.split_whitespace();
            let key_name = parts.next().ok_or_else(|| missing(line, name, "a key name"))?;
            let key = Key::from_name(key_name).ok_or_else(|| ScriptError::UnknownKey {
                line,
                key: key_name.to_string(),
            })?;
            let source = match parts.next() {
                None | Some("list") => EventSource::List,
                Some("field") => EventSource::Field,
                Some(other) => {
                    return Err(ScriptError::UnknownSource {
                        line,
                        source_name: other.to_string(),
                    })
                }
            };
            Command::Key { key, source }
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };

    Ok(Some(command))
}

/// Cut a trailing comment: a `#` at the start or after whitespace
fn strip_comment(text: &str) -> &str {
    let mut after_space = true;
    for (pos, c) in text.char_indices() {
        if c == '#' && after_space {
            return &text[..pos];
        }
        after_space = c.is_whitespace();
    }
    text
}

fn parse_index(line: usize, command: &str, rest: &str) -> Result<usize, ScriptError> {
    if rest.is_empty() {
        return Err(missing(line, command, "a row index"));
    }
    rest.parse().map_err(|_| ScriptError::InvalidIndex {
        line,
        value: rest.to_string(),
    })
}

fn missing(line: usize, command: &str, expected: &'static str) -> ScriptError {
    ScriptError::MissingArgument {
        line,
        command: command.to_string(),
        expected,
    }
}
