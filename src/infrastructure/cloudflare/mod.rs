//! Cloudflare API client.
//!
//! Provides [`CloudflareClient`], the HTTP implementation of
//! [`crate::domain::clients::CdnClient`], and the response schemas it parses.

mod client;
mod schema;

pub use client::{CloudflareClient, DEFAULT_CLOUDFLARE_API_URL};
pub use schema::{ApiMessage, PurgeRequest, PurgeResponse, ZoneListResponse, ZoneRecord};
