//! Logging initialization and configuration.
//!
//! Output goes to stderr so it never mixes into a redirected stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "execkit=info";

/// Initialize the logging system.
///
/// Uses the `RUST_LOG` environment variable for filtering. If not set,
/// defaults to `execkit=info`.
///
/// # Panics
///
/// Panics if called more than once, or if another tracing subscriber
/// has already been set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Try to initialize the logging system.
///
/// Returns `Ok(())` if successful, or `Err` if logging has already been
/// initialized.
pub fn try_init() -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    try_init_with_filter(filter)
}

/// Initialize logging from a configured level.
///
/// A bare level such as `debug` is scoped to this crate; anything else is
/// taken as a full filter directive.
pub fn init_with_level(level: &str) -> Result<(), tracing_subscriber::util::TryInitError> {
    try_init_with_filter(EnvFilter::new(filter_directive(level)))
}

fn try_init_with_filter(filter: EnvFilter) -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
}

fn filter_directive(level: &str) -> String {
    match level.to_ascii_lowercase().as_str() {
        lvl @ ("error" | "warn" | "info" | "debug" | "trace" | "off") => {
            format!("execkit={}", lvl)
        }
        _ => level.to_string(),
    }
}
