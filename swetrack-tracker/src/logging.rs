//! Logging setup for the integration.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{Error, Result};

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "swetrack_tracker=info,swetrack_api=info";

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG` when set, falling back to [`DEFAULT_LOG_FILTER`].
/// Hosts that bring their own subscriber simply skip this.
pub fn init() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
        .map_err(|e| Error::config(format!("failed to install log subscriber: {e}")))
}
