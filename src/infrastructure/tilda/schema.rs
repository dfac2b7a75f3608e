//! Response schemas for the Tilda API.
//!
//! Every field the pipeline reads is optional here so that a missing field
//! is reported as "not found" instead of a parse failure.

use serde::Deserialize;

/// Status value Tilda uses for a successful lookup.
pub const STATUS_FOUND: &str = "FOUND";

/// Envelope shared by all Tilda API responses.
#[derive(Debug, Deserialize)]
pub struct TildaResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub result: Option<T>,
    /// Error description, present when `status` is `ERROR`.
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> TildaResponse<T> {
    /// Returns the result only if the status is `FOUND`.
    pub fn found(self) -> Option<T> {
        match self.status.as_deref() {
            Some(STATUS_FOUND) => self.result,
            _ => None,
        }
    }
}

/// `result` of `GET /v1/getprojectinfo/`.
#[derive(Debug, Deserialize)]
pub struct ProjectInfo {
    #[serde(default)]
    pub customdomain: Option<String>,
}

/// `result` of `GET /v1/getpage/`.
#[derive(Debug, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
}
