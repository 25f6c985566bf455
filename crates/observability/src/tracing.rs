//! Subscriber setup for the service binaries.

use tracing_subscriber::EnvFilter;

/// Install the global JSON subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `info`. Calling
/// this after a subscriber is already installed is a no-op, which keeps
/// test binaries from fighting over the global default.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
