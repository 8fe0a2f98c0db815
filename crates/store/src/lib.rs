//! `zoo-store` — SQLite persistence for zoo records.
//!
//! [`ZooStore`] owns the connection pool and bootstraps the schema on
//! connect. The per-entity modules are plain data mappers: one statement per
//! call, manual row mapping, no behavior. Timestamp actions (feed, vet,
//! clean) are composed above this layer.

pub mod animals;
pub mod employees;
pub mod enclosures;
mod error;
mod store;

pub use error::StoreError;
pub use store::ZooStore;
