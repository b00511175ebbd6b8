//! The logger: level filtering, context merging and sink fan-out

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, LazyLock};

use crate::config::{Level, LoggerConfig};
use crate::entry::{Context, LogEntry, merge_context};
use crate::env::Environment;
use crate::sink::{ConsoleSink, JsonSink, SharedSink};

/// Process-wide logger built from the environment on first use.
static DEFAULT_LOGGER: LazyLock<Logger> = LazyLock::new(Logger::default);

/// Get the process-wide default logger
///
/// Built lazily with no configuration: level and sink come from the
/// [`Environment`] detected at that moment.
#[inline]
pub fn logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Create a logger from configuration
pub fn create_logger(config: LoggerConfig) -> Logger {
    Logger::new(config)
}

/// Structured logger
///
/// Configuration is fixed at construction. Cloning is cheap and a
/// [`child`](Logger::child) shares the same sink list.
///
/// Logging never fails from the caller's point of view: every sink is called
/// in order and any error or panic it raises is discarded.
#[derive(Clone)]
pub struct Logger {
    min_level: Level,
    sinks: Arc<[SharedSink]>,
    default_context: Context,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl From<LoggerConfig> for Logger {
    fn from(config: LoggerConfig) -> Self {
        Self::new(config)
    }
}

impl Logger {
    /// Build a logger, resolving unset options from the environment
    pub fn new(config: LoggerConfig) -> Self {
        let LoggerConfig {
            min_level,
            sinks,
            default_context,
            environment,
        } = config;

        let environment = environment.unwrap_or_else(Environment::detect);
        let sinks = sinks.unwrap_or_else(|| vec![default_sink(environment)]);

        Self {
            min_level: min_level.unwrap_or_else(|| environment.default_level()),
            sinks: sinks.into(),
            default_context: default_context.unwrap_or_default(),
        }
    }

    /// Minimum level this logger dispatches
    #[inline]
    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Context merged into every entry
    #[inline]
    pub fn default_context(&self) -> &Context {
        &self.default_context
    }

    /// Configured sinks, in dispatch order
    #[inline]
    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    /// Whether a call at `level` would reach the sinks
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// Log at `level` with optional call-site context
    ///
    /// Call-site keys win over default context keys.
    pub fn log(&self, level: Level, message: impl AsRef<str>, context: Option<&Context>) {
        if !self.enabled(level) {
            return;
        }

        let context = match context {
            Some(overlay) => merge_context(&self.default_context, overlay),
            None => self.default_context.clone(),
        };
        let entry = LogEntry::new(level, message.as_ref(), context);
        self.dispatch(&entry);
    }

    /// Hand an entry to every sink, isolating each one.
    fn dispatch(&self, entry: &LogEntry) {
        for sink in self.sinks() {
            // Errors and panics from one sink must not reach the caller or
            // skip the remaining sinks.
            let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.log(entry)));
        }
    }

    /// Log a debug message
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message, None);
    }

    /// Log a debug message with context
    pub fn debug_with(&self, message: impl AsRef<str>, context: Context) {
        self.log(Level::Debug, message, Some(&context));
    }

    /// Log an info message
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message, None);
    }

    /// Log an info message with context
    pub fn info_with(&self, message: impl AsRef<str>, context: Context) {
        self.log(Level::Info, message, Some(&context));
    }

    /// Log a warning
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(Level::Warn, message, None);
    }

    /// Log a warning with context
    pub fn warn_with(&self, message: impl AsRef<str>, context: Context) {
        self.log(Level::Warn, message, Some(&context));
    }

    /// Log an error
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message, None);
    }

    /// Log an error with context
    pub fn error_with(&self, message: impl AsRef<str>, context: Context) {
        self.log(Level::Error, message, Some(&context));
    }

    /// Create a child logger with additional default context
    ///
    /// The child keeps this logger's level and shares its sinks; `context`
    /// keys win over inherited ones.
    pub fn child(&self, context: Context) -> Self {
        Self {
            min_level: self.min_level,
            sinks: Arc::clone(&self.sinks),
            default_context: merge_context(&self.default_context, &context),
        }
    }
}

fn default_sink(environment: Environment) -> SharedSink {
    if environment.is_production() {
        Arc::new(JsonSink::new())
    } else {
        Arc::new(ConsoleSink::new())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sinks: Vec<_> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("sinks", &sinks)
            .field("default_context", &self.default_context)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context;
    use crate::core::{LogError, LogResult};
    use crate::sink::Sink;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        entries: Mutex<Vec<LogEntry>>,
    }

    impl Recorder {
        fn entries(&self) -> Vec<LogEntry> {
            self.entries.lock().unwrap().clone()
        }
    }

    impl Sink for Recorder {
        fn log(&self, entry: &LogEntry) -> LogResult<()> {
            self.entries.lock().unwrap().push(entry.clone());
            Ok(())
        }
    }

    fn recording(min_level: Level) -> (Logger, Arc<Recorder>) {
        let recorder = Arc::new(Recorder::default());
        let logger = Logger::new(
            LoggerConfig::new()
                .with_min_level(min_level)
                .with_sink(recorder.clone()),
        );
        (logger, recorder)
    }

    fn call(logger: &Logger, level: Level, message: &str) {
        match level {
            Level::Debug => logger.debug(message),
            Level::Info => logger.info(message),
            Level::Warn => logger.warn(message),
            Level::Error => logger.error(message),
        }
    }

    #[rstest]
    fn test_filtering(
        #[values(Level::Debug, Level::Info, Level::Warn, Level::Error)] min_level: Level,
        #[values(Level::Debug, Level::Info, Level::Warn, Level::Error)] level: Level,
    ) {
        let (logger, recorder) = recording(min_level);
        call(&logger, level, "hello");

        let entries = recorder.entries();
        if level.rank() < min_level.rank() {
            assert!(entries.is_empty());
        } else {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].level(), level);
            assert_eq!(entries[0].message(), "hello");
        }
    }

    #[test]
    fn test_min_level_warn_scenario() {
        let (logger, recorder) = recording(Level::Warn);

        logger.info("hi");
        assert!(recorder.entries().is_empty());

        logger.warn("hi");
        let entries = recorder.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level(), Level::Warn);
        assert_eq!(entries[0].message(), "hi");
        assert!(entries[0].context().is_empty());
    }

    #[rstest]
    #[case(Environment::Development, Level::Debug, "console")]
    #[case(Environment::Production, Level::Info, "json")]
    fn test_environment_defaults(
        #[case] environment: Environment,
        #[case] level: Level,
        #[case] sink: &str,
    ) {
        let logger = Logger::new(LoggerConfig::new().with_environment(environment));
        assert_eq!(logger.min_level(), level);
        assert_eq!(logger.sinks().len(), 1);
        assert_eq!(logger.sinks()[0].name(), sink);
        assert!(logger.default_context().is_empty());
    }

    #[test]
    fn test_explicit_level_beats_environment() {
        let logger = Logger::new(
            LoggerConfig::new()
                .with_environment(Environment::Production)
                .with_min_level(Level::Debug),
        );
        assert_eq!(logger.min_level(), Level::Debug);
        assert!(logger.enabled(Level::Debug));
    }

    #[test]
    fn test_context_merge_precedence() {
        let recorder = Arc::new(Recorder::default());
        let logger = Logger::new(
            LoggerConfig::new()
                .with_min_level(Level::Debug)
                .with_sink(recorder.clone())
                .with_default_context(context! { "service" => "api", "region" => "eu" }),
        );

        logger.info_with("call", context! { "region" => "us", "user" => 7 });

        let entries = recorder.entries();
        assert_eq!(
            entries[0].context(),
            &context! { "service" => "api", "region" => "us", "user" => 7 }
        );
        assert_eq!(logger.default_context()["region"], "eu");
    }

    #[test]
    fn test_child_chain() {
        let (logger, recorder) = recording(Level::Debug);
        let child = logger.child(context! { "a" => 1 }).child(context! { "a" => 2 });
        assert_eq!(child.default_context()["a"], 2);

        child.debug_with("x", context! { "a" => 3 });
        child.debug("y");

        let entries = recorder.entries();
        assert_eq!(entries[0].context()["a"], 3);
        assert_eq!(entries[1].context()["a"], 2);
        assert!(logger.default_context().is_empty());
    }

    #[test]
    fn test_child_shares_sinks_and_level() {
        let (logger, recorder) = recording(Level::Warn);
        let child = logger.child(context! { "requestId" => "abc" });

        assert!(Arc::ptr_eq(&logger.sinks, &child.sinks));
        assert_eq!(child.min_level(), Level::Warn);

        child.info("filtered");
        child.error("failed");

        let entries = recorder.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message(), "failed");
        assert_eq!(entries[0].context()["requestId"], "abc");
    }

    #[test]
    fn test_failing_sinks_are_isolated() {
        let recorder = Arc::new(Recorder::default());
        let failing: SharedSink =
            Arc::new(|_: &LogEntry| -> LogResult<()> { Err(LogError::sink("failing", "always")) });
        let panicking: SharedSink =
            Arc::new(|_: &LogEntry| -> LogResult<()> { panic!("sink exploded") });

        let logger = Logger::new(
            LoggerConfig::new()
                .with_min_level(Level::Debug)
                .with_sinks([failing, panicking, recorder.clone() as SharedSink]),
        );

        logger.error("still delivered");
        logger.warn("again");

        let messages: Vec<_> = recorder
            .entries()
            .iter()
            .map(|e| e.message().to_string())
            .collect();
        assert_eq!(messages, ["still delivered", "again"]);
    }

    #[test]
    fn test_sink_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let sinks: Vec<SharedSink> = (0..3)
            .map(|i| {
                let order = Arc::clone(&order);
                Arc::new(move |_: &LogEntry| -> LogResult<()> {
                    order.lock().unwrap().push(i);
                    Ok(())
                }) as SharedSink
            })
            .collect();

        let logger = Logger::new(
            LoggerConfig::new()
                .with_min_level(Level::Info)
                .with_sinks(sinks),
        );
        logger.info("fan out");

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_sink_list_drops_everything() {
        let logger = Logger::new(
            LoggerConfig::new()
                .with_environment(Environment::Development)
                .with_sinks(Vec::new()),
        );
        assert!(logger.sinks().is_empty());
        logger.error("nowhere to go");
    }

    #[test]
    fn test_repeated_calls_differ_only_in_timestamp() {
        let (logger, recorder) = recording(Level::Debug);
        logger.info_with("same", context! { "k" => "v" });
        logger.info_with("same", context! { "k" => "v" });

        let entries = recorder.entries();
        assert_eq!(entries.len(), 2);
        let strip = |e: &LogEntry| {
            LogEntry::with_timestamp(e.level(), e.message(), "", e.context().clone())
        };
        assert_eq!(strip(&entries[0]), strip(&entries[1]));
    }

    #[test]
    fn test_debug_output() {
        let (logger, _recorder) = recording(Level::Info);
        let text = format!("{logger:?}");
        assert!(text.contains("min_level: Info"));
        assert!(text.contains("Recorder"));
    }

    #[test]
    fn test_logger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Logger>();
    }
}
