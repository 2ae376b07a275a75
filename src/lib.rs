//! # warehouse-catalog
//!
//! Thread-safe, in-memory catalog of products indexed by unique id and by
//! producer.
//!
//! The [`Catalog`](domain::Catalog) keeps a primary index (id → item) and a
//! secondary index (producer → items) behind a single lock, so the two never
//! disagree at any observable point. Items are immutable and handed out as
//! shared [`ItemHandle`](domain::ItemHandle)s that stay valid after removal.
//!
//! ## Architecture
//!
//! ```text
//! Callers (any thread)
//!     │
//!     ├── CatalogService (service/)   logging + change events
//!     │
//!     ├── Catalog (domain/)           id index + producer index, one mutex
//!     └── EventBus (domain/)          tokio broadcast of CatalogEvent
//! ```
//!
//! ## Example
//!
//! ```
//! use warehouse_catalog::domain::{Catalog, Item};
//!
//! let catalog = Catalog::new();
//! assert!(catalog.add(Item::shared("id1", "acme", "anvil", 120)));
//! assert!(!catalog.add(Item::shared("id1", "acme", "anvil", 120)));
//! assert_eq!(catalog.find_by_producer("acme").len(), 1);
//! assert_eq!(catalog.remove_by_id("id1"), 1);
//! assert!(catalog.find_by_id("id1").is_none());
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod telemetry;
