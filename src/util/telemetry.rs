//! Telemetry helpers for structured logging and tracing.

/// Initialize tracing for demos and tests. Users can install their own
/// subscriber; this helper installs an env-filtered fmt subscriber if none
/// is set, defaulting to `info` when `RUST_LOG` is absent so per-cycle
/// trace output stays opt-in.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
