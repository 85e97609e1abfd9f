use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` directives win over `level`
/// when set.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));
    install(filter);
}

/// Install the subscriber at exactly `level`, ignoring `RUST_LOG`
pub fn init_fixed(level: LogLevel) {
    install(EnvFilter::new(level.to_string()));
}

fn install(filter: EnvFilter) {
    // Already installed when called twice in one process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
