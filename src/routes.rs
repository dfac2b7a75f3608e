//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health` - Health check (public)
//! - everything else - Purge webhook, authenticated by `publickey`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging without query strings

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    api::routes::webhook_routes()
        .with_state(state)
        .layer(tracing::layer())
}
