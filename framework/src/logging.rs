//! Structured logging setup
//!
//! Verbosity comes from `RUST_LOG` (e.g. `RUST_LOG=todolist_web=debug,info`).
//! When it is unset or invalid the level is `info`, or `debug` with
//! `APP_DEBUG=true`.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
