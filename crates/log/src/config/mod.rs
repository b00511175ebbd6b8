//! Configuration types and builders

mod level;
mod presets;

use std::fmt;

pub use level::Level;

use crate::entry::Context;
use crate::env::Environment;
use crate::sink::SharedSink;

/// Logger configuration
///
/// Every option is optional. Whatever is left unset is resolved from the
/// runtime [`Environment`] when the [`Logger`](crate::Logger) is built, and
/// nothing can change after that.
#[derive(Clone, Default)]
pub struct LoggerConfig {
    /// Minimum level to log (default: info in production, debug in development)
    pub min_level: Option<Level>,

    /// Output sinks, in dispatch order (default: one sink picked by environment)
    pub sinks: Option<Vec<SharedSink>>,

    /// Context merged into every entry
    pub default_context: Option<Context>,

    /// Pin the environment instead of detecting it from the process
    pub environment: Option<Environment>,
}

impl LoggerConfig {
    /// Create an empty configuration (fully environment-driven)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum level
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Append a sink
    ///
    /// The first call replaces the environment default with an explicit list.
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sinks.get_or_insert_with(Vec::new).push(sink);
        self
    }

    /// Replace the sink list
    ///
    /// An empty list is accepted and yields a logger that drops every entry.
    pub fn with_sinks(mut self, sinks: impl IntoIterator<Item = SharedSink>) -> Self {
        self.sinks = Some(sinks.into_iter().collect());
        self
    }

    /// Set the default context
    pub fn with_default_context(mut self, context: Context) -> Self {
        self.default_context = Some(context);
        self
    }

    /// Pin the environment used to resolve defaults
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("min_level", &self.min_level)
            .field("sinks", &self.sinks.as_ref().map(Vec::len))
            .field("default_context", &self.default_context)
            .field("environment", &self.environment)
            .finish()
    }
}
