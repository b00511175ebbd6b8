//! Core components shared by every part of the pipeline.
//!
//! ### [`error`] - Error handling
//! The single [`LogError`] enum and the [`LogResult`] alias. Sinks report
//! failures through it; the logger swallows them at the dispatch boundary.

pub mod error;

pub use error::{LogError, LogResult};
