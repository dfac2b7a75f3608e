//! # Tilda → Cloudflare cache purge
//!
//! A webhook bridge: Tilda calls it when a page is published, and it purges
//! Cloudflare's cache for that page's public URLs.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Transient entities and the CMS/CDN client traits
//! - **Application Layer** ([`application`]) - Purge orchestration and key check
//! - **Infrastructure Layer** ([`infrastructure`]) - Tilda and Cloudflare HTTP clients
//! - **API Layer** ([`api`]) - Webhook handler, DTOs, and middleware
//!
//! ## Request Flow
//!
//! ```text
//! webhook ─▶ Tilda: project → domain
//!         ─▶ Cloudflare: domain → zone
//!         ─▶ Tilda: page → filename, alias
//!         ─▶ Cloudflare: purge https://{domain}/{filename}, https://{domain}/{alias}
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export CLOUDFLARE_API_TOKEN="..."
//! export TILDA_PUBLIC_KEY="..."
//! export TILDA_SECRET_KEY="..."
//!
//! cargo run
//! curl "http://localhost:3000/?projectid=1&pageid=2&publickey=$TILDA_PUBLIC_KEY"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, ClientError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, PurgeService};
    pub use crate::domain::clients::{CdnClient, CmsClient};
    pub use crate::domain::entities::{PageFilenames, PurgeOutcome, PurgeReport, ZoneId};
    pub use crate::error::{AppError, ClientError};
    pub use crate::state::AppState;
}
