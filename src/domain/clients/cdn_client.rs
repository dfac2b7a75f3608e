//! Client trait for the CDN management API.

use crate::domain::entities::{PurgeOutcome, ZoneId};
use crate::error::ClientResult;
use async_trait::async_trait;

/// Zone lookup and cache purge against the CDN.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CdnClient: Send + Sync {
    /// Resolves a domain name to the zone that serves it.
    ///
    /// When several zones match, the first listed one is used.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::NotFound`] if the lookup is not
    /// successful or lists no zone.
    /// Returns [`crate::error::ClientError::Upstream`] on transport or parse errors.
    async fn resolve_zone_id(&self, domain: &str) -> ClientResult<ZoneId>;

    /// Asks the CDN to evict the given URLs from the zone's cache.
    ///
    /// A rejection by the CDN is not an error: it is logged and reported
    /// as [`PurgeOutcome::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::Upstream`] only when the request
    /// could not be sent or no response was received.
    async fn purge_urls(&self, zone_id: &ZoneId, urls: &[String]) -> ClientResult<PurgeOutcome>;
}
