//! Tilda API client.
//!
//! Provides [`TildaClient`], the HTTP implementation of
//! [`crate::domain::clients::CmsClient`], and the response schemas it parses.

mod client;
mod schema;

pub use client::{DEFAULT_TILDA_API_URL, TildaClient};
pub use schema::{PageInfo, ProjectInfo, TildaResponse};
