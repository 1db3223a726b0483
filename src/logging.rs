//! Log subscriber setup for binaries and tests embedding the crate.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "meal_max=debug" } else { "meal_max=info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a compact stdout logger, failing if one is already set.
///
/// `RUST_LOG` overrides the default `meal_max=info` (or `meal_max=debug`
/// when `verbose`).
pub fn try_init_logger(verbose: bool) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}

/// Install the logger. Panics if a global subscriber already exists.
pub fn init_logger(verbose: bool) {
    if let Err(err) = try_init_logger(verbose) {
        panic!("failed to install logger: {err}");
    }
}
