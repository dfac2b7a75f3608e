//! Page cache purge service.

use std::sync::Arc;

use crate::domain::clients::{CdnClient, CmsClient};
use crate::domain::entities::{PurgeReport, ZoneId, build_purge_urls};
use crate::error::ClientResult;
use tracing::{debug, info};

/// Service that purges the CDN cache for a single CMS page.
///
/// Each call runs the full lookup chain against both APIs; nothing is
/// remembered between calls, so two identical requests produce two
/// identical purge commands.
pub struct PurgeService<C: CmsClient, D: CdnClient> {
    cms: Arc<C>,
    cdn: Arc<D>,
}

impl<C: CmsClient, D: CdnClient> PurgeService<C, D> {
    /// Creates a new purge service.
    pub fn new(cms: Arc<C>, cdn: Arc<D>) -> Self {
        Self { cms, cdn }
    }

    /// Resolves the page's public URLs and asks the CDN to purge them.
    ///
    /// # Request Flow
    ///
    /// 1. Resolve the project's custom domain (CMS)
    /// 2. Resolve the domain's zone (CDN)
    /// 3. Resolve the page's filename and alias (CMS)
    /// 4. Build `https://{domain}/{name}` for each of them
    /// 5. Purge those URLs (CDN)
    ///
    /// A purge rejected by the CDN still returns `Ok`; inspect
    /// [`PurgeReport::outcome`] to tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::error::ClientError`] raised by steps 1-3 or
    /// by a transport failure in step 5. Later steps are not attempted.
    pub async fn purge_page(&self, project_id: &str, page_id: &str) -> ClientResult<PurgeReport> {
        let domain = self.cms.resolve_project_domain(project_id).await?;
        debug!(project_id, domain = %domain, "Resolved project domain");

        let zone_id = self.cdn.resolve_zone_id(&domain).await?;
        debug!(domain = %domain, zone_id = %zone_id, "Resolved zone");

        let filenames = self.cms.resolve_page_filenames(page_id).await?;
        let urls = build_purge_urls(&domain, &filenames);

        let outcome = self.cdn.purge_urls(&zone_id, &urls).await?;
        info!(
            project_id,
            page_id,
            purged = outcome.is_purged(),
            "Purge finished for {} URL(s)",
            urls.len()
        );

        Ok(PurgeReport {
            domain,
            zone_id,
            urls,
            outcome,
        })
    }

    /// Resolves only the project's custom domain.
    ///
    /// # Errors
    ///
    /// Propagates [`CmsClient::resolve_project_domain`] errors.
    pub async fn project_domain(&self, project_id: &str) -> ClientResult<String> {
        self.cms.resolve_project_domain(project_id).await
    }

    /// Resolves only the zone serving `domain`.
    ///
    /// # Errors
    ///
    /// Propagates [`CdnClient::resolve_zone_id`] errors.
    pub async fn zone_for_domain(&self, domain: &str) -> ClientResult<ZoneId> {
        self.cdn.resolve_zone_id(domain).await
    }
}
