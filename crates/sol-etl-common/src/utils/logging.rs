use tracing_subscriber::EnvFilter;

/// Filter taken from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs a global `fmt` subscriber. `RUST_LOG` takes precedence over
/// `default_level`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .try_init()
        .is_ok()
}
