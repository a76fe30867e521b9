//! Diagnostic logging via `tracing`.
//!
//! Logs go to stderr so they never mix with the report lines the CLI prints
//! on stdout.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Builds the filter: `RUST_LOG` wins, then `level`, then [`DEFAULT_LEVEL`].
fn build_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_LEVEL)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize logging for the CLI.
///
/// Installing a second global subscriber is a no-op, so calling this twice is
/// harmless.
pub fn init(level: Option<&str>) {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(layer)
        .try_init();

    tracing::debug!(level = level.unwrap_or(DEFAULT_LEVEL), "logging initialized");
}

/// Initialize logging for tests (captured by the test harness).
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
