//! Catalog app: binds a store state machine to the fetch engine.
mod store;

pub use store::CatalogStore;
