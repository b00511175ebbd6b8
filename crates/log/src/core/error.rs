//! Error handling for strata-log
//!
//! Nothing in the public logging surface returns these errors to the caller:
//! [`Logger`](crate::Logger) discards every sink failure. They exist so sinks
//! have a typed way to signal failure and so level parsing can be reported.

/// Result type for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A severity name that is not one of debug/info/warn/error
    #[error("Invalid log level '{0}': expected debug, info, warn or error")]
    InvalidLevel(String),

    /// Writing to an output stream failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An entry could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A custom sink reported a failure
    #[error("Sink '{sink}' failed: {reason}")]
    Sink {
        /// Name of the failing sink
        sink: String,
        /// What went wrong
        reason: String,
    },
}

impl LogError {
    /// Create a failure for a custom sink
    pub fn sink(sink: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Sink {
            sink: sink.into(),
            reason: reason.into(),
        }
    }
}
