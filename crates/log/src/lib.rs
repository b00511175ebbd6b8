//! # Strata Log - Structured Logging Facade
//!
//! Leveled log calls with key/value context, filtered by a minimum level and
//! fanned out to pluggable sinks. Zero configuration picks sensible defaults
//! from the environment:
//!
//! | Environment | Minimum level | Sink |
//! |-------------|---------------|------|
//! | development | debug | [`ConsoleSink`] (colorized lines) |
//! | production (`NODE_ENV` or `VERCEL_ENV` = `production`) | info | [`JsonSink`] (JSON lines) |
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_log::prelude::*;
//!
//! logger().info("Server starting");
//!
//! let requests = logger().child(context! { "component" => "http" });
//! requests.info_with("listening", context! { "port" => 8080 });
//! ```
//!
//! ## Custom sinks
//!
//! ```rust
//! use std::sync::Arc;
//! use strata_log::{Level, LogEntry, LogResult, LoggerConfig, create_logger};
//!
//! let logger = create_logger(
//!     LoggerConfig::new()
//!         .with_min_level(Level::Warn)
//!         .with_sink(Arc::new(|entry: &LogEntry| -> LogResult<()> {
//!             eprintln!("{}: {}", entry.level(), entry.message());
//!             Ok(())
//!         })),
//! );
//! logger.warn("disk almost full");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod config;
mod core;
pub mod entry;
pub mod env;
mod logger;
mod macros;
pub mod sink;

// Public API
pub use config::{Level, LoggerConfig};
pub use self::core::{LogError, LogResult};
pub use entry::{Context, LogEntry};
pub use env::Environment;
pub use logger::{Logger, create_logger, logger};
#[cfg(feature = "tracing")]
pub use sink::TracingSink;
pub use sink::{Channel, ConsoleSink, JsonSink, SharedSink, Sink};

/// Prelude for common imports
pub mod prelude {
    pub use crate::logger::logger;
    pub use crate::{
        Context, Level, LogEntry, LogResult, Logger, LoggerConfig, Sink, context, create_logger,
    };
}
