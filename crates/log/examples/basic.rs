//! Default logger, explicit configuration and child loggers.
//!
//! ```text
//! cargo run -p strata-log --example basic -- warn
//! NODE_ENV=production cargo run -p strata-log --example basic
//! ```

use strata_log::prelude::*;

fn main() -> anyhow::Result<()> {
    let log = logger();
    log.debug("booting");
    log.info_with("server starting", context! { "port" => 8080, "tls" => false });

    let request = log.child(context!(request_id = "req-123", method = "GET"));
    request.info("handling request");
    request.warn_with("slow upstream", context! { "upstream" => "billing", "ms" => 1450 });
    request.error_with(
        "upstream failed",
        context! { "error" => serde_json::json!({ "code": 502, "retryable": true }) },
    );

    // Optional minimum level from the first argument
    if let Some(arg) = std::env::args().nth(1) {
        let level: Level = arg.parse()?;
        let filtered = create_logger(LoggerConfig::new().with_min_level(level));
        for level in Level::ALL {
            filtered.log(level, format!("{level} passes the {arg} filter"), None);
        }
    }

    Ok(())
}
