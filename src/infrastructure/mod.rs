//! Infrastructure layer for external integrations.
//!
//! This layer implements the client traits defined by the domain layer
//! over HTTP.
//!
//! # Modules
//!
//! - [`http`] - Shared `reqwest` client construction
//! - [`tilda`] - Tilda API client ([`crate::domain::clients::CmsClient`])
//! - [`cloudflare`] - Cloudflare API client ([`crate::domain::clients::CdnClient`])

pub mod cloudflare;
pub mod http;
pub mod tilda;
