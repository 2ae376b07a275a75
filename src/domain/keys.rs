//! Type-safe catalog keys.
//!
//! [`ItemId`] (primary, unique) and [`Producer`] (secondary, non-unique) are
//! newtypes around `String` so the two indexes cannot be queried with the
//! wrong kind of key. Both implement `Borrow<str>`, which lets the indexes be
//! probed with a plain `&str` without allocating.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Unique identifier of an item among all items in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Name of the producer an item belongs to. Many items may share one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Producer(String);

impl ItemId {
    /// Wraps any string as an id, including the empty string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Wraps a string as an id, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidArgument`] if `id` is empty.
    pub fn try_new(id: impl Into<String>) -> CatalogResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(CatalogError::InvalidArgument(
                "item id must not be empty".to_string(),
            ));
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Producer {
    /// Wraps a string as a producer name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the producer name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_string_key {
    ($t:ty) => {
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_key!(ItemId);
impl_string_key!(Producer);
