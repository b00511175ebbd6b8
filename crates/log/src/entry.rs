//! Log entries and their context
//!
//! A [`LogEntry`] is built once per accepted call, handed to every sink by
//! shared reference and dropped after dispatch.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::config::Level;

/// Structured metadata attached to an entry.
///
/// Keys keep insertion order for display. Writing an existing key replaces
/// its value without moving it.
pub type Context = IndexMap<String, Value>;

/// Insert a serializable value under `key`.
///
/// Values that fail to serialize (e.g. maps with non-string keys) are skipped
/// rather than reported.
pub fn insert_field<T>(context: &mut Context, key: impl Into<String>, value: &T)
where
    T: Serialize + ?Sized,
{
    if let Ok(value) = serde_json::to_value(value) {
        context.insert(key.into(), value);
    }
}

/// Overlay `overlay` onto `base`; overlay keys win on collision.
pub fn merge_context(base: &Context, overlay: &Context) -> Context {
    let mut merged = Context::with_capacity(base.len() + overlay.len());
    merged.extend(base.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged.extend(overlay.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Current UTC time as ISO-8601 with millisecond precision,
/// e.g. `2024-01-01T00:00:00.000Z`.
pub fn timestamp_now() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}

pub(crate) fn format_timestamp(at: OffsetDateTime) -> String {
    let format =
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
    at.to_offset(time::UtcOffset::UTC)
        .format(format)
        .unwrap_or_default()
}

/// A single log entry
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    level: Level,
    message: String,
    timestamp: String,
    context: Context,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn new(level: Level, message: impl Into<String>, context: Context) -> Self {
        Self::with_timestamp(level, message, timestamp_now(), context)
    }

    /// Create an entry with an explicit timestamp
    pub fn with_timestamp(
        level: Level,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        context: Context,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: timestamp.into(),
            context,
        }
    }

    /// Severity of the entry
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Message text
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// ISO-8601 UTC timestamp
    #[inline]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Merged context (possibly empty)
    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context;
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    #[test]
    fn test_format_timestamp() {
        let at = datetime!(2024-01-01 00:00:00.000 UTC);
        assert_eq!(format_timestamp(at), "2024-01-01T00:00:00.000Z");

        let at = datetime!(2024-03-09 17:05:42.123456 UTC);
        assert_eq!(format_timestamp(at), "2024-03-09T17:05:42.123Z");
    }

    #[test]
    fn test_format_timestamp_converts_to_utc() {
        let at = datetime!(2024-06-30 23:30:00.5 -2);
        assert_eq!(format_timestamp(at), "2024-07-01T01:30:00.500Z");
    }

    #[test]
    fn test_timestamp_now_shape() {
        let ts = timestamp_now();
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn test_merge_overlay_wins() {
        let base = context! { "a" => 1, "b" => "x" };
        let overlay = context! { "b" => "y", "c" => true };
        let merged = merge_context(&base, &overlay);

        let keys: Vec<_> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(merged["b"], "y");
        assert_eq!(merged["a"], 1);
        assert_eq!(base["b"], "x");
    }

    #[test]
    fn test_merge_empty() {
        let base = context! { "k" => 1 };
        assert_eq!(merge_context(&base, &Context::new()), base);
        assert_eq!(merge_context(&Context::new(), &base), base);
    }

    #[test]
    fn test_insert_field_skips_unserializable() {
        let mut ctx = Context::new();
        insert_field(&mut ctx, "ok", &[1, 2]);

        let mut bad = std::collections::HashMap::new();
        bad.insert((1, 2), "tuple keys are not valid JSON object keys");
        insert_field(&mut ctx, "bad", &bad);

        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx["ok"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_entry_accessors() {
        let entry = LogEntry::with_timestamp(
            Level::Info,
            "started",
            "2024-01-01T00:00:00.000Z",
            context! { "port" => 8080 },
        );
        assert_eq!(entry.level(), Level::Info);
        assert_eq!(entry.message(), "started");
        assert_eq!(entry.timestamp(), "2024-01-01T00:00:00.000Z");
        assert_eq!(entry.context()["port"], 8080);
    }
}
