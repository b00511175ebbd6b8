//! Flat JSON-lines output for production

use serde_json::{Map, Value};

use super::{Channel, Sink};
use crate::core::LogResult;
use crate::entry::LogEntry;

/// JSON sink
///
/// Emits one object per line: `level`, `message` and `timestamp` first,
/// then every context key at the top level. A context key named like a
/// fixed key replaces its value. Warn and error lines go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSink;

impl JsonSink {
    /// Create a JSON sink
    pub fn new() -> Self {
        Self
    }

    /// Build the flat record for an entry
    pub fn record(&self, entry: &LogEntry) -> Map<String, Value> {
        let mut record = Map::with_capacity(3 + entry.context().len());
        record.insert("level".to_string(), Value::from(entry.level().as_str()));
        record.insert("message".to_string(), Value::from(entry.message()));
        record.insert("timestamp".to_string(), Value::from(entry.timestamp()));
        for (key, value) in entry.context() {
            record.insert(key.clone(), value.clone());
        }
        record
    }

    /// Render an entry as a single JSON line, without the trailing newline
    pub fn render(&self, entry: &LogEntry) -> LogResult<String> {
        Ok(serde_json::to_string(&self.record(entry))?)
    }
}

impl Sink for JsonSink {
    fn log(&self, entry: &LogEntry) -> LogResult<()> {
        let line = self.render(entry)?;
        Channel::for_level(entry.level()).write_line(&line)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
