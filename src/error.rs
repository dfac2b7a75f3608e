//! Error types shared by the upstream clients and the HTTP layer.
//!
//! [`ClientError`] is what the Tilda and Cloudflare clients return; its
//! `Display` output is the raw message that ends up in the `Error: <message>`
//! response body. [`AppError`] is what handlers return and knows how to turn
//! itself into a plain-text HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure of a single outbound API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The upstream answered, but the requested entity (project, page,
    /// zone) is absent or the response is missing an expected field.
    #[error("{0}")]
    NotFound(String),

    /// Network failure, timeout, or a response body that could not be parsed.
    #[error("{0}")]
    Upstream(String),
}

impl ClientError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

/// Result type for upstream client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing parameters")]
    MissingParameters,

    #[error("Wrong public key")]
    WrongPublicKey,

    #[error("Error: {0}")]
    Pipeline(#[from] ClientError),

    /// Only produced when strict purge mode is enabled.
    #[error("Error: Cache purge rejected by CDN (status {status})")]
    PurgeRejected { status: u16 },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameters => StatusCode::BAD_REQUEST,
            AppError::WrongPublicKey => StatusCode::FORBIDDEN,
            AppError::Pipeline(_) | AppError::PurgeRejected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
