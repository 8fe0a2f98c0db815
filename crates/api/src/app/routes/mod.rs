use axum::Router;

pub mod animals;
pub mod common;
pub mod employees;
pub mod enclosures;
pub mod system;

/// Router for every zoo endpoint. Paths are flat (`/animal`, `/animals`,
/// ...), matching the public contract, so the entity routers are merged
/// rather than nested.
pub fn router() -> Router {
    Router::new()
        .merge(animals::router())
        .merge(enclosures::router())
        .merge(employees::router())
}
