//! `zoo-core` — entity record types shared by the store and the HTTP API.
//!
//! This crate contains **pure data** (no persistence or transport concerns):
//! the persisted shape of each entity and the caller-supplied creation
//! fields. Timestamp actions live in the service layer, not here.

pub mod animal;
pub mod employee;
pub mod enclosure;

pub use animal::{AnimalRecord, NewAnimal};
pub use employee::{EmployeeRecord, NewEmployee};
pub use enclosure::{EnclosureRecord, NewEnclosure};
