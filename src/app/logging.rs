//! Logging configuration and initialization

use crate::app::config::AppConfig;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when set, otherwise from the configured verbosity
fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()))
}

/// Initialize tracing for the binary
///
/// A second call is a no-op, so tests and embedders can call it freely.
pub fn init_logging(config: &AppConfig) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.verbose >= 2)
        .with_thread_ids(config.verbose >= 3)
        .with_line_number(config.verbose >= 3)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        debug!("effectio started with verbosity level: {}", config.verbose);
        trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
    }
}
