use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr so they never interleave with the report on stdout.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::new(level.to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
