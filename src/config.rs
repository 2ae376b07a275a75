//! Catalog configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`). Unset variables fall back to defaults; variables that are set
//! but unparsable are reported as [`CatalogError::InvalidConfig`].
//!
//! | Variable                   | Default | Meaning                              |
//! |----------------------------|---------|--------------------------------------|
//! | `CATALOG_INITIAL_CAPACITY` | `0`     | pre-sized slots in the primary index |
//! | `EVENT_BUS_CAPACITY`       | `1024`  | broadcast ring-buffer size           |
//! | `CATALOG_LOG_FORMAT`       | `text`  | `text` or `json`                     |

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};

/// Output format of the tracing subscriber installed by
/// [`crate::telemetry::init`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl FromStr for LogFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(CatalogError::invalid_config("CATALOG_LOG_FORMAT", s)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Top-level catalog configuration.
///
/// Loaded once at startup via [`CatalogConfig::from_env`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of items the primary index is pre-sized for.
    pub initial_capacity: usize,

    /// Capacity of the [`crate::domain::EventBus`] broadcast channel.
    pub event_bus_capacity: usize,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            event_bus_capacity: 1024,
            log_format: LogFormat::Text,
        }
    }
}

impl CatalogConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` first to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] if a variable is set but
    /// cannot be parsed.
    pub fn from_env() -> CatalogResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidConfig`] if a value is present but
    /// cannot be parsed, or if `EVENT_BUS_CAPACITY` is zero.
    pub fn from_lookup<F>(lookup: F) -> CatalogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let initial_capacity =
            parse_var(&lookup, "CATALOG_INITIAL_CAPACITY")?.unwrap_or(defaults.initial_capacity);

        let event_bus_capacity: usize =
            parse_var(&lookup, "EVENT_BUS_CAPACITY")?.unwrap_or(defaults.event_bus_capacity);
        if event_bus_capacity == 0 {
            return Err(CatalogError::invalid_config("EVENT_BUS_CAPACITY", "0"));
        }

        let log_format = match lookup("CATALOG_LOG_FORMAT") {
            Some(raw) => raw.trim().parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            initial_capacity,
            event_bus_capacity,
            log_format,
        })
    }
}

/// Parses the variable `key` as `T`. Missing values yield `Ok(None)`.
fn parse_var<T, F>(lookup: &F, key: &str) -> CatalogResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CatalogError::invalid_config(key, raw)),
    }
}
