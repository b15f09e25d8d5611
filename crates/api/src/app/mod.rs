//! HTTP application wiring (Axum router + shared services).
//!
//! - `services.rs`: the shared store and the session table
//! - `routes/`: HTTP routes + handlers (one file per screen of the inventory UI)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use stockmgr_store::InventoryStore;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router around `store` (public entrypoint used by `main.rs`).
pub fn build_app(store: InventoryStore) -> Router {
    let services = Arc::new(services::AppServices::new(store));

    // Protected routes: require a live session.
    let protected = routes::router().layer(axum::middleware::from_fn_with_state(
        services.clone(),
        middleware::session_middleware,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/session/login", post(routes::session::login))
        .merge(protected)
        .layer(Extension(services))
}
