use std::env;

use tracing_subscriber::EnvFilter;

/// Initialize the logging system with the specified log level
///
/// Safe to call more than once; only the first call installs the
/// subscriber (hot-reload hosts and tests may re-enter).
pub fn init_logging() {
    // Get the log level from environment variable or default to INFO
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Create a custom environment filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Initialize the subscriber with custom formatting
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .try_init();
}
