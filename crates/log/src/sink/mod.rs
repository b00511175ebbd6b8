//! Output sinks
//!
//! A [`Sink`] receives every entry that passes the logger's level filter.
//! Built-in sinks:
//! - [`ConsoleSink`]: colorized human-readable lines (development default)
//! - [`JsonSink`]: one flat JSON object per line (production default)
//! - [`TracingSink`]: re-emits entries as `tracing` events (feature `tracing`)
//!
//! Any `Fn(&LogEntry) -> LogResult<()>` closure is a sink too.

mod console;
mod json;
#[cfg(feature = "tracing")]
mod bridge;

use std::io::{self, Write};
use std::sync::Arc;

pub use console::ConsoleSink;
pub use json::JsonSink;
#[cfg(feature = "tracing")]
pub use bridge::TracingSink;

use crate::config::Level;
use crate::core::LogResult;
use crate::entry::LogEntry;

/// Output destination for log entries
///
/// # Example
///
/// ```rust
/// use strata_log::{LogEntry, LogResult, Sink};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl Sink for Collect {
///     fn log(&self, entry: &LogEntry) -> LogResult<()> {
///         self.0.lock().unwrap().push(entry.message().to_string());
///         Ok(())
///     }
/// }
/// ```
pub trait Sink: Send + Sync {
    /// Write one entry.
    ///
    /// An `Err` (or a panic) is a sink failure. The logger discards it and
    /// moves on to the next sink.
    fn log(&self, entry: &LogEntry) -> LogResult<()>;

    /// Short identifier, used in `Debug` output of loggers
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a sink, as stored by loggers
pub type SharedSink = Arc<dyn Sink>;

impl<F> Sink for F
where
    F: Fn(&LogEntry) -> LogResult<()> + Send + Sync,
{
    fn log(&self, entry: &LogEntry) -> LogResult<()> {
        self(entry)
    }
}

/// Standard stream an entry is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

impl Channel {
    /// Stream for a level: warn and error go to stderr, the rest to stdout
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Warn | Level::Error => Self::Stderr,
            Level::Debug | Level::Info => Self::Stdout,
        }
    }

    /// Write `line` plus a newline while holding the stream lock
    pub fn write_line(self, line: &str) -> io::Result<()> {
        match self {
            Self::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Self::Stderr => writeln!(io::stderr().lock(), "{line}"),
        }
    }
}
