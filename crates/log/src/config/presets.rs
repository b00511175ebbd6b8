//! Configuration presets for common scenarios

use std::sync::Arc;

use super::{Level, LoggerConfig};
use crate::env::Environment;
use crate::sink::{ConsoleSink, JsonSink};

impl LoggerConfig {
    /// Development configuration (colorized console, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            min_level: Some(Level::Debug),
            sinks: Some(vec![Arc::new(ConsoleSink::new())]),
            environment: Some(Environment::Development),
            ..Self::default()
        }
    }

    /// Production configuration (JSON lines, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            min_level: Some(Level::Info),
            sinks: Some(vec![Arc::new(JsonSink::new())]),
            environment: Some(Environment::Production),
            ..Self::default()
        }
    }
}
