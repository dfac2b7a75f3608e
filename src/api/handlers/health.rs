//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns service liveness and version.
///
/// # Endpoint
///
/// `GET /health`
///
/// Upstream APIs are not contacted, so this answers 200 as long as the
/// process is serving requests.
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
