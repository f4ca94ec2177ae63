//! Tracing subscriber setup for the command-line front end.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Install a fmt subscriber writing to stderr, filtered by `RUST_LOG`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
