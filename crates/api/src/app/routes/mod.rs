use axum::{Router, routing::post};

pub mod products;
pub mod reports;
pub mod session;
pub mod suppliers;
pub mod system;

/// Router for all session-protected endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/session/logout", post(session::logout))
        .nest("/products", products::router())
        .nest("/suppliers", suppliers::router())
        .nest("/reports", reports::router())
}
