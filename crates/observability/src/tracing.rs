//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Set to `json` for machine-readable log lines.
pub const LOG_FORMAT_ENV: &str = "FARMSTEAD_LOG_FORMAT";

/// Initialize tracing for the process.
///
/// Filtering follows `RUST_LOG` (default `info`). Logs go to stderr so they
/// never interleave with command output on stdout.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if json {
        builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
    } else {
        builder.compact().try_init()
    };
}
