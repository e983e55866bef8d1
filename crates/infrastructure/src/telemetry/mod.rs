//! Structured logging setup
//!
//! Installs a `tracing` subscriber with an environment-driven filter.
//! The filter honours `RUST_LOG`; without it everything logs at `info`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber
///
/// Safe to call more than once; later calls are ignored. Tests rely on
/// that when several of them initialize logging.
pub fn init_tracing(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
