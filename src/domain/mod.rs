//! Domain layer: item model, dual-index catalog, and change events.
//!
//! This module contains the item value type and its keys, the [`Catalog`]
//! that indexes items by id and by producer, and the event bus used to
//! broadcast committed changes.

pub mod catalog;
pub mod catalog_event;
pub mod event_bus;
pub mod item;
pub mod keys;

pub use catalog::Catalog;
pub use catalog_event::CatalogEvent;
pub use event_bus::EventBus;
pub use item::{Item, ItemHandle, Price};
pub use keys::{ItemId, Producer};
