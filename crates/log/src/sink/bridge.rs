//! Bridge sink that forwards entries into `tracing`

use super::Sink;
use crate::config::Level;
use crate::core::LogResult;
use crate::entry::LogEntry;

/// Sink that re-emits entries as `tracing` events
///
/// Events use target `strata_log`, carry the entry message as the event
/// message and the context as a compact JSON `context` field (omitted when
/// empty). Whatever subscriber is installed decides where they end up.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use strata_log::{LoggerConfig, TracingSink, create_logger};
///
/// let logger = create_logger(LoggerConfig::new().with_sink(Arc::new(TracingSink::new())));
/// logger.info("forwarded to the tracing subscriber");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a tracing bridge sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn log(&self, entry: &LogEntry) -> LogResult<()> {
        let message = entry.message();
        let timestamp = entry.timestamp();

        // tracing needs a constant level per callsite
        macro_rules! emit {
            ($($fields:tt)*) => {
                match entry.level() {
                    Level::Error => ::tracing::error!(target: "strata_log", $($fields)*),
                    Level::Warn => ::tracing::warn!(target: "strata_log", $($fields)*),
                    Level::Info => ::tracing::info!(target: "strata_log", $($fields)*),
                    Level::Debug => ::tracing::debug!(target: "strata_log", $($fields)*),
                }
            };
        }

        if entry.context().is_empty() {
            emit!(timestamp, "{message}");
        } else {
            let context = serde_json::to_string(entry.context())?;
            emit!(timestamp, context = %context, "{message}");
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
