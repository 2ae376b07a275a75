//! Service layer: catalog operations with logging and change events.
//!
//! [`CatalogService`] wraps the [`super::domain::Catalog`], logs every
//! mutation, and emits events through the [`super::domain::EventBus`].

pub mod catalog_service;

pub use catalog_service::CatalogService;
