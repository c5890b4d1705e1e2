//! Logging initialization.
//!
//! Logs go to stderr so that table and JSON output on stdout stay parseable.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Env var holding the log filter, e.g. `PNR_LOG=personnummer=debug`.
const LOG_ENV: &str = "PNR_LOG";

/// Env var selecting the log format (`json` or anything else for text).
const LOG_FORMAT_ENV: &str = "PNR_LOG_FORMAT";

/// Install the global subscriber.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer).init();
    }
}
