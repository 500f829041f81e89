//! Logging system initialization
//!
//! Sets up tracing-based logging to stderr. Level defaults to INFO and can be
//! configured via the `RUST_LOG` environment variable.

use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("FerrisTip v{} started", env!("CARGO_PKG_VERSION"));
    }
}
