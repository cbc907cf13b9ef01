//! Keyboard bindings for the calculator.
//!
//! | Key(s) | Action |
//! |--------|--------|
//! | `0`-`9` | digit |
//! | `+` `-` `*` `/` (also `x` `×` `÷`) | operator |
//! | `.` `,` | decimal point |
//! | `=`, Enter | evaluate |
//! | `s` `S` `m` `M` | toggle sign |
//! | `c` `C` `r` `R` | reset |
//! | Backspace, Delete | clear entry |

use std::fmt;

use calc_core::{Action, Digit, Operator};
use thiserror::Error;
use tracing::trace;

/// A raw key as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
}

impl fmt::Display for Key {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Enter => f.write_str("<enter>"),
            Self::Backspace => f.write_str("<bs>"),
            Self::Delete => f.write_str("<del>"),
        }
    }
}

/// Error returned when a key line contains a malformed `<name>` token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unknown key name '<{0}>'")]
    UnknownName(String),

    #[error("unterminated key name starting at column {0}")]
    Unterminated(usize),
}

/// Maps a key to the action it triggers, or `None` for unbound keys.
pub fn action_for(key: Key) -> Option<Action> {
    let action = match key {
        Key::Enter => Action::Evaluate,
        Key::Backspace | Key::Delete => Action::ClearEntry,
        Key::Char(c) => match c {
            '.' | ',' => Action::DecimalPoint,
            '=' => Action::Evaluate,
            's' | 'S' | 'm' | 'M' => Action::ToggleSign,
            'c' | 'C' | 'r' | 'R' => Action::Reset,
            _ => {
                if let Some(digit) = Digit::from_char(c) {
                    Action::Digit(digit)
                } else if let Some(op) = Operator::parse(c) {
                    Action::SetOperator(op)
                } else {
                    trace!(key = %c, "unbound key ignored");
                    return None;
                }
            }
        },
    };
    Some(action)
}

fn named_key(name: &str) -> Option<Key> {
    match name.to_ascii_lowercase().as_str() {
        "enter" | "ret" | "return" => Some(Key::Enter),
        "bs" | "backspace" => Some(Key::Backspace),
        "del" | "delete" => Some(Key::Delete),
        _ => None,
    }
}

/// Splits a line of typed input into keys.
///
/// Every character is a key except whitespace, which is skipped, and
/// `<name>` tokens such as `<enter>`, `<bs>` or `<del>` (case-insensitive).
///
/// # Example
///
/// ```
/// use calc_cli::keymap::{parse_keys, Key};
///
/// let keys = parse_keys("1 + 2<Enter>").unwrap();
/// assert_eq!(
///     keys,
///     vec![Key::Char('1'), Key::Char('+'), Key::Char('2'), Key::Enter]
/// );
/// ```
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyParseError> {
    let mut keys = Vec::new();
    let mut chars = line.char_indices();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '<' {
            keys.push(Key::Char(c));
            continue;
        }

        let rest = &line[start + 1..];
        let Some(len) = rest.find('>') else {
            return Err(KeyParseError::Unterminated(line[..start].chars().count()));
        };
        let name = &rest[..len];
        let key = named_key(name).ok_or_else(|| KeyParseError::UnknownName(name.to_string()))?;
        keys.push(key);
        // Skip the name and the closing '>'.
        chars.nth(name.chars().count());
    }

    Ok(keys)
}
