//! Change events emitted after catalog mutations.
//!
//! Every successful `add` or `remove_by_id` performed through the
//! [`CatalogService`](crate::service::CatalogService) publishes a
//! [`CatalogEvent`] on the [`super::EventBus`]. Rejected mutations publish
//! nothing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Item, ItemId, Price, Producer};

/// Domain event describing one committed catalog change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum CatalogEvent {
    /// An item was inserted.
    ItemAdded {
        /// Id of the new item.
        item_id: ItemId,
        /// Producer the item was grouped under.
        producer: Producer,
        /// Display name.
        name: String,
        /// Price in the smallest currency unit.
        price: Price,
        /// Commit timestamp.
        timestamp: DateTime<Utc>,
    },

    /// An item was removed.
    ItemRemoved {
        /// Id of the removed item.
        item_id: ItemId,
        /// Producer group the item was removed from.
        producer: Producer,
        /// Commit timestamp.
        timestamp: DateTime<Utc>,
    },
}

impl CatalogEvent {
    /// Builds an [`CatalogEvent::ItemAdded`] for `item`, stamped now.
    #[must_use]
    pub fn added(item: &Item) -> Self {
        Self::ItemAdded {
            item_id: item.id.clone(),
            producer: item.producer.clone(),
            name: item.name.clone(),
            price: item.price,
            timestamp: Utc::now(),
        }
    }

    /// Builds an [`CatalogEvent::ItemRemoved`] for `item`, stamped now.
    #[must_use]
    pub fn removed(item: &Item) -> Self {
        Self::ItemRemoved {
            item_id: item.id.clone(),
            producer: item.producer.clone(),
            timestamp: Utc::now(),
        }
    }

    /// Returns the id of the item this event is about.
    #[must_use]
    pub fn item_id(&self) -> &ItemId {
        match self {
            Self::ItemAdded { item_id, .. } | Self::ItemRemoved { item_id, .. } => item_id,
        }
    }

    /// Returns the event type as a static string slice.
    #[must_use]
    pub const fn event_type_str(&self) -> &'static str {
        match self {
            Self::ItemAdded { .. } => "item_added",
            Self::ItemRemoved { .. } => "item_removed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_copy_item_fields() {
        let item = Item::new("id1", "acme", "anvil", 120);
        let added = CatalogEvent::added(&item);
        assert_eq!(added.item_id().as_str(), "id1");
        assert_eq!(added.event_type_str(), "item_added");

        let removed = CatalogEvent::removed(&item);
        assert_eq!(removed.item_id(), &item.id);
        assert_eq!(removed.event_type_str(), "item_removed");
    }

    #[test]
    fn serializes_with_event_type_tag() {
        let event = CatalogEvent::added(&Item::new("id1", "acme", "anvil", 120));
        let json = serde_json::to_string(&event).unwrap_or_default();
        assert!(json.contains("\"event_type\":\"item_added\""));
        assert!(json.contains("\"item_id\":\"id1\""));
        assert!(json.contains("\"price\":120"));
    }
}
