//! Opt-in log output for hosts that do not install their own subscriber.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Install a console subscriber filtered by `RUST_LOG`.
///
/// Safe to call more than once, and a no-op if the host already installed a
/// global subscriber.
pub fn init() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .try_init()
            .is_ok();

        if installed {
            tracing::debug!("console logging initialized");
        }
    });
}
