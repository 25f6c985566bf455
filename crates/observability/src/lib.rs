//! Process-wide observability wiring.

/// Set up logging for the process. Idempotent.
pub fn init() {
    tracing::init();
}

/// Subscriber construction (filter + JSON formatting).
pub mod tracing;
