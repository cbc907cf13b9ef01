//! Line-oriented interactive loop.
//!
//! Each input line is a run of keys fed to the [`Session`]; lines starting
//! with `:` are commands (`:q`, `:quit`, `:log <filter>`).

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::warn;

use crate::logging;
use crate::session::{Session, render};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    LogLevel(&'a str),
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let body = line.strip_prefix(':')?;
        let (name, arg) = body.split_once(' ').unwrap_or((body, ""));
        let command = match name {
            "q" | "quit" => Self::Quit,
            "log" => Self::LogLevel(arg.trim()),
            _ => Self::Unknown(name),
        };
        Some(command)
    }
}

/// Options for [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplOptions {
    /// Width passed to [`render`].
    pub width: usize,
    /// Print a frame after each line. Turned off when an observer already
    /// prints one per key.
    pub print_frames: bool,
}

/// Reads lines from `input` until EOF or `:quit`, writing frames to `out`.
///
/// Malformed key lines are reported on `out` and otherwise ignored.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    options: ReplOptions,
) -> Result<()> {
    if options.print_frames {
        writeln!(out, "{}", render(&session.snapshot(), options.width))?;
    }

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let line = line.trim();

        match Command::parse(line) {
            Some(Command::Quit) => break,
            Some(Command::LogLevel(level)) => {
                if let Err(err) = logging::set_log_level(level) {
                    writeln!(out, "{err}")?;
                }
                continue;
            }
            Some(Command::Unknown(name)) => {
                writeln!(out, "unknown command ':{name}'")?;
                continue;
            }
            None => {}
        }

        match session.feed(line) {
            Ok(snapshot) => {
                if options.print_frames {
                    writeln!(out, "{}", render(&snapshot, options.width))?;
                }
            }
            Err(err) => {
                warn!(%err, line, "ignoring malformed input");
                writeln!(out, "{err}")?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
