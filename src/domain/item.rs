//! Immutable catalog item and its shared handle.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ItemId, Producer};

/// Price of an item in the smallest currency unit.
pub type Price = u32;

/// Shared, read-only handle to an [`Item`].
///
/// Handles stay valid after the item is removed from the catalog; removal
/// only drops the catalog's own reference.
pub type ItemHandle = Arc<Item>;

/// Description of a single product.
///
/// Never mutated once created. Changing an item means removing it and
/// adding a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id of the item among all items.
    pub id: ItemId,
    /// Producer of the item.
    pub producer: Producer,
    /// Display name.
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: Price,
}

impl Item {
    /// Creates a new item.
    #[must_use]
    pub fn new(
        id: impl Into<ItemId>,
        producer: impl Into<Producer>,
        name: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            producer: producer.into(),
            name: name.into(),
            price,
        }
    }

    /// Creates a new item already wrapped in a handle.
    #[must_use]
    pub fn shared(
        id: impl Into<ItemId>,
        producer: impl Into<Producer>,
        name: impl Into<String>,
        price: Price,
    ) -> ItemHandle {
        Arc::new(Self::new(id, producer, name, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_wraps_new() {
        let handle = Item::shared("id1", "acme", "anvil", 120);
        assert_eq!(*handle, Item::new("id1", "acme", "anvil", 120));
        assert_eq!(handle.id.as_str(), "id1");
        assert_eq!(handle.producer.as_str(), "acme");
    }

    #[test]
    fn json_shape() {
        let item = Item::new("id1", "acme", "anvil", 120);
        let json = serde_json::to_value(&item).unwrap_or_default();
        assert_eq!(json["id"], "id1");
        assert_eq!(json["producer"], "acme");
        assert_eq!(json["price"], 120);
    }
}
