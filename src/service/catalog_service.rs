//! Catalog service: runs catalog operations, logs them, and emits events.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::domain::{Catalog, CatalogEvent, EventBus, ItemHandle};

/// Orchestration layer over a shared [`Catalog`].
///
/// Stateless coordinator: owns a reference to the [`Catalog`] for state and
/// an [`EventBus`] for change notification. Every mutation follows the
/// pattern: run the catalog operation → emit the event from the commit hook,
/// still under the catalog lock → log → return the catalog's result.
/// Publishing never blocks, and it happening under the lock makes the event
/// stream follow commit order. Rejected mutations emit nothing.
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    event_bus: EventBus,
}

impl CatalogService {
    /// Creates a new `CatalogService`.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, event_bus: EventBus) -> Self {
        Self { catalog, event_bus }
    }

    /// Builds an empty catalog and event bus sized from `config`.
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            Arc::new(Catalog::with_capacity(config.initial_capacity)),
            EventBus::new(config.event_bus_capacity),
        )
    }

    /// Returns a reference to the inner [`Catalog`].
    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Returns a reference to the inner [`EventBus`].
    #[must_use]
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Adds an item, publishing [`CatalogEvent::ItemAdded`] on success.
    ///
    /// Returns `false` without side effects if the id is already taken.
    pub fn add_item(&self, item: ItemHandle) -> bool {
        let added = self.catalog.add_with(Arc::clone(&item), |committed| {
            let _ = self.event_bus.publish(CatalogEvent::added(committed));
        });
        if !added {
            tracing::debug!(item_id = %item.id, "duplicate item id rejected");
            return false;
        }
        tracing::info!(item_id = %item.id, producer = %item.producer, "item added");
        true
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn find_item(&self, id: &str) -> Option<ItemHandle> {
        self.catalog.find_by_id(id)
    }

    /// Returns all items of a producer.
    #[must_use]
    pub fn find_items_by_producer(&self, producer: &str) -> Vec<ItemHandle> {
        let items = self.catalog.find_by_producer(producer);
        tracing::trace!(producer, count = items.len(), "producer lookup");
        items
    }

    /// Removes an item by id, publishing [`CatalogEvent::ItemRemoved`] when
    /// something was removed.
    ///
    /// Returns the number of removed items (0 or 1).
    pub fn remove_item(&self, id: &str) -> usize {
        let removed = self.catalog.take_by_id_with(id, |committed| {
            let _ = self.event_bus.publish(CatalogEvent::removed(committed));
        });
        let Some(item) = removed else {
            tracing::debug!(item_id = id, "remove of unknown item id");
            return 0;
        };
        tracing::info!(item_id = %item.id, producer = %item.producer, "item removed");
        1
    }
}
