//! Handler for the cache purge webhook.

use axum::extract::{RawQuery, State};
use tracing::{error, warn};

use crate::api::dto::purge::PurgeParams;
use crate::domain::entities::PurgeOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Purges the CDN cache for the page named in the query string.
///
/// # Endpoint
///
/// Any method, any path not claimed by another route:
///
/// ```text
/// GET /?pageid=<id>&projectid=<id>&publickey=<key>
/// ```
///
/// # Request Flow
///
/// 1. Require `pageid`, `projectid` and `publickey`
/// 2. Compare `publickey` with the configured Tilda public key
/// 3. Resolve domain, zone and filenames, then purge
///    (see [`crate::application::services::PurgeService::purge_page`])
///
/// # Response Codes
///
/// - **200 OK**: `Cache purged for <url1>, <url2>`
/// - **400 Bad Request**: `Missing parameters`
/// - **403 Forbidden**: `Wrong public key`
/// - **500 Internal Server Error**: `Error: <message>`
///
/// A purge rejected by Cloudflare is still answered with 200 unless strict
/// purge mode is enabled.
pub async fn purge_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<String, AppError> {
    let request = PurgeParams::from_query(query.as_deref())
        .require_all()
        .ok_or(AppError::MissingParameters)?;

    state.auth_service.authenticate(&request.public_key)?;

    let report = state
        .purge_service
        .purge_page(&request.project_id, &request.page_id)
        .await
        .map_err(|e| {
            error!(
                project_id = %request.project_id,
                page_id = %request.page_id,
                "Purge failed: {}",
                e
            );
            AppError::from(e)
        })?;

    if let PurgeOutcome::Rejected { status, .. } = &report.outcome {
        if state.strict_purge {
            return Err(AppError::PurgeRejected { status: *status });
        }
        warn!(status, "Purge rejected by CDN, answering 200");
    }

    Ok(report.confirmation())
}
