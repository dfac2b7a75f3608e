//! API route configuration.

use crate::api::handlers::{health_handler, purge_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Webhook and service routes.
///
/// # Endpoints
///
/// - `GET  /health` - Liveness check
/// - `*    /*`      - Purge webhook (any method, any other path)
pub fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .fallback(purge_handler)
}
