//! Catalog error types.
//!
//! The catalog operations themselves never fail: duplicate inserts, removals
//! of unknown ids and empty lookups are ordinary `bool` / count / empty
//! results. [`CatalogError`] covers the fallible edges around the core:
//! configuration loading, constructor input and tracing setup.

/// Result alias used by the fallible parts of the crate.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Error enum for everything outside the catalog's infallible core.
///
/// # Error Codes
///
/// | Range     | Category      | Variants                      |
/// |-----------|---------------|-------------------------------|
/// | 1000–1999 | Validation    | `InvalidArgument`             |
/// | 3000–3999 | Environment   | `InvalidConfig`, `Telemetry`  |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// Caller-supplied value was rejected by a constructor.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An environment variable was set but could not be parsed.
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig {
        /// Name of the offending variable.
        key: String,
        /// Raw value as read from the environment.
        value: String,
    },

    /// The global tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

impl CatalogError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidArgument(_) => 1001,
            Self::InvalidConfig { .. } => 3001,
            Self::Telemetry(_) => 3002,
        }
    }

    /// Builds an [`CatalogError::InvalidConfig`] from a key/value pair.
    #[must_use]
    pub fn invalid_config(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_key_and_value() {
        let err = CatalogError::invalid_config("EVENT_BUS_CAPACITY", "lots");
        assert_eq!(
            err.to_string(),
            "invalid value \"lots\" for EVENT_BUS_CAPACITY"
        );
    }

    #[test]
    fn error_codes_are_grouped_by_category() {
        assert_eq!(
            CatalogError::InvalidArgument("x".to_string()).error_code(),
            1001
        );
        assert_eq!(CatalogError::invalid_config("K", "V").error_code(), 3001);
        assert_eq!(
            CatalogError::Telemetry("already set".to_string()).error_code(),
            3002
        );
    }

    #[test]
    fn environment_errors_share_a_range() {
        let environment = [
            CatalogError::invalid_config("EVENT_BUS_CAPACITY", "0"),
            CatalogError::Telemetry("already set".to_string()),
        ];
        assert!(environment.iter().all(|e| (3000..4000).contains(&e.error_code())));
        assert!((1000..2000).contains(&CatalogError::InvalidArgument(String::new()).error_code()));
    }
}
