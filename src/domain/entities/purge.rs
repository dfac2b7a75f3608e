//! Result of a cache purge.

use super::zone::ZoneId;

/// What the CDN reported for a purge command.
///
/// The purge call itself never fails on a rejection; the outcome is kept
/// so callers can decide whether a rejection matters to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    Purged,
    Rejected {
        /// HTTP status returned by the CDN API.
        status: u16,
        /// Error messages from the response body, if it had any.
        errors: Vec<String>,
    },
}

impl PurgeOutcome {
    pub fn is_purged(&self) -> bool {
        matches!(self, PurgeOutcome::Purged)
    }
}

/// Everything resolved while purging one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeReport {
    pub domain: String,
    pub zone_id: ZoneId,
    pub urls: Vec<String>,
    pub outcome: PurgeOutcome,
}

impl PurgeReport {
    /// Human-readable confirmation listing the purged URLs.
    pub fn confirmation(&self) -> String {
        format!("Cache purged for {}", self.urls.join(", "))
    }
}
