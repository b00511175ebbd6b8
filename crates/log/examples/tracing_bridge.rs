//! Feed entries into a `tracing-subscriber` pipeline next to the console sink.

use std::sync::Arc;

use strata_log::{ConsoleSink, Level, LoggerConfig, TracingSink, context, create_logger};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let logger = create_logger(
        LoggerConfig::new()
            .with_min_level(Level::Debug)
            .with_sink(Arc::new(ConsoleSink::new()))
            .with_sink(Arc::new(TracingSink::new())),
    );

    logger.info_with("written twice", context! { "sinks" => 2 });
}
