use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{DEFAULT_FILTER, LogConfig};

/// Installs the global tracing subscriber described by `config`.
///
/// Records are written to standard error without ANSI colours. Returns
/// `false` when tracing is disabled or a global subscriber was already
/// installed, which makes repeated calls (tests, embedding) harmless.
///
/// ```rust,ignore
/// use logging::{LogConfig, init_tracing};
///
/// init_tracing(&LogConfig::from_env());
/// tracing::debug!(target: "pv_like::relay", "opened source");
/// ```
pub fn init_tracing(config: &LogConfig) -> bool {
    if config.is_off() {
        return false;
    }

    let filter = EnvFilter::try_new(config.filter())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
