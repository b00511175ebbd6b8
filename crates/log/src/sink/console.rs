//! Colorized human-readable output for development

use std::fmt::Write as _;

use serde_json::Value;

use super::{Channel, Sink};
use crate::config::Level;
use crate::core::LogResult;
use crate::entry::LogEntry;

#[cfg(feature = "ansi")]
use colored::{ColoredString, Colorize};

/// Role of a painted fragment; picks its style when colors are on
#[derive(Debug, Clone, Copy)]
enum Tone {
    Timestamp,
    Level(Level),
    Key,
}

#[cfg(feature = "ansi")]
impl Tone {
    fn apply(self, text: &str) -> ColoredString {
        match self {
            Self::Timestamp | Self::Level(Level::Debug) => text.dimmed(),
            Self::Level(Level::Info) => text.cyan(),
            Self::Level(Level::Warn) => text.yellow(),
            Self::Level(Level::Error) => text.red(),
            Self::Key => text.magenta(),
        }
    }
}

/// Console sink
///
/// Writes `<timestamp> <[LEVEL]> <message> key=value ...` lines. Warn and
/// error lines go to stderr, debug and info lines to stdout.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    colors: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self {
            colors: terminal_wants_colors(),
        }
    }
}

#[cfg(feature = "ansi")]
fn terminal_wants_colors() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}

#[cfg(feature = "ansi")]
fn force_colors() {
    colored::control::set_override(true);
}

#[cfg(not(feature = "ansi"))]
fn terminal_wants_colors() -> bool {
    false
}

#[cfg(not(feature = "ansi"))]
fn force_colors() {}

impl ConsoleSink {
    /// Create a console sink
    ///
    /// Colors are on when the `ansi` feature is enabled and the terminal
    /// accepts them (`NO_COLOR`, `CLICOLOR`, `CLICOLOR_FORCE` are honoured).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable ANSI colors
    ///
    /// `true` forces colored output process-wide, even when stdout is not a
    /// terminal. Without the `ansi` feature colors stay off.
    pub fn with_colors(mut self, colors: bool) -> Self {
        if colors {
            force_colors();
        }
        self.colors = colors && cfg!(feature = "ansi");
        self
    }

    /// Whether ANSI colors are emitted
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Render one entry as a single line, without the trailing newline
    pub fn format_entry(&self, entry: &LogEntry) -> String {
        let mut line = String::with_capacity(64 + entry.message().len());

        self.paint(&mut line, Tone::Timestamp, entry.timestamp());
        line.push(' ');
        self.paint(&mut line, Tone::Level(entry.level()), entry.level().tag());
        line.push(' ');
        line.push_str(entry.message());

        for (key, value) in entry.context() {
            line.push(' ');
            self.paint(&mut line, Tone::Key, key);
            line.push('=');
            push_value(&mut line, value);
        }

        line
    }

    #[cfg(feature = "ansi")]
    fn paint(&self, out: &mut String, tone: Tone, text: &str) {
        if self.colors {
            // Writing into a String cannot fail.
            let _ = write!(out, "{}", tone.apply(text));
        } else {
            out.push_str(text);
        }
    }

    #[cfg(not(feature = "ansi"))]
    fn paint(&self, out: &mut String, _tone: Tone, text: &str) {
        out.push_str(text);
    }
}

/// Strings are quoted verbatim, arrays/objects are compact JSON and every
/// other value uses its JSON text.
fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => {
            out.push('"');
            out.push_str(s);
            out.push('"');
        }
        other => {
            // Writing into a String cannot fail.
            let _ = write!(out, "{other}");
        }
    }
}

impl Sink for ConsoleSink {
    fn log(&self, entry: &LogEntry) -> LogResult<()> {
        let line = self.format_entry(entry);
        Channel::for_level(entry.level()).write_line(&line)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
