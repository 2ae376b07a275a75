//! Tracing subscriber setup.
//!
//! The filter is read from `RUST_LOG` and defaults to `info`.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::{CatalogError, CatalogResult};

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`CatalogError::Telemetry`] if a global subscriber is already
/// installed. Callers that may initialize twice can ignore the error.
pub fn init(format: LogFormat) -> CatalogResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().with_target(false).try_init(),
    };
    result.map_err(|e| CatalogError::Telemetry(e.to_string()))
}
