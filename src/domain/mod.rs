//! Domain layer: the values threaded through a purge and the client contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Transient values produced while handling one request
//! - [`clients`] - Trait definitions for the CMS and CDN APIs
//!
//! Nothing here survives a request. The clients are implemented in
//! [`crate::infrastructure`] and orchestrated by
//! [`crate::application::services::PurgeService`].
//!
//! # Purge Flow
//!
//! 1. [`clients::CmsClient::resolve_project_domain`] maps a project to its domain
//! 2. [`clients::CdnClient::resolve_zone_id`] maps the domain to a zone
//! 3. [`clients::CmsClient::resolve_page_filenames`] maps a page to its filenames
//! 4. [`entities::build_purge_urls`] joins domain and filenames
//! 5. [`clients::CdnClient::purge_urls`] evicts the URLs

pub mod clients;
pub mod entities;
