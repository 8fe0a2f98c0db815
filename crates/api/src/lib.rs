//! `zoo-api` — HTTP surface for the zoo record keeper.
//!
//! Layout:
//! - `app/services.rs`: service layer (store handle + timestamp actions)
//! - `app/routes/`: routes + handlers (one file per entity)
//! - `app/dto.rs`: request DTOs and per-entity projections
//! - `app/errors.rs`: consistent JSON error responses

pub mod app;
