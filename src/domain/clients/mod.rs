//! Client trait definitions for the two remote APIs.
//!
//! These traits abstract the outbound calls the purge pipeline makes.
//! Implementations live in [`crate::infrastructure`]:
//!
//! - [`CmsClient`] - implemented by [`crate::infrastructure::tilda::TildaClient`]
//! - [`CdnClient`] - implemented by [`crate::infrastructure::cloudflare::CloudflareClient`]
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod cdn_client;
pub mod cms_client;

pub use cdn_client::CdnClient;
pub use cms_client::CmsClient;

#[cfg(test)]
pub use cdn_client::MockCdnClient;
#[cfg(test)]
pub use cms_client::MockCmsClient;
