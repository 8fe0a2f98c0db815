//! HTTP application wiring (axum router + service wiring).

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use zoo_store::ZooStore;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around an injected store handle.
///
/// `main` passes the on-disk store; tests pass an in-memory one. No handler
/// reaches for process-global state.
pub fn build_app(store: ZooStore) -> Router {
    let services = Arc::new(services::ZooServices::new(store));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
