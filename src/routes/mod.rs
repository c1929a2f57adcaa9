//! HTTP routes.
//!
//! The service exposes a single route, `GET /`. Everything else falls through
//! to axum's defaults (404 for unknown paths, 405 for other methods on `/`).

pub mod greeting;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;

/// Creates the Axum router with the greeting route and request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(greeting::hello))
        // Outermost, so the request span covers routing and the handler
        .layer(middleware::from_fn(request_id_layer))
}
