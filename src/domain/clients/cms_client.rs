//! Client trait for the CMS read API.

use crate::domain::entities::PageFilenames;
use crate::error::ClientResult;
use async_trait::async_trait;

/// Read-only lookups against the CMS.
///
/// Implementations authenticate with a public/secret key pair supplied at
/// construction and perform no retries or caching.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CmsClient: Send + Sync {
    /// Resolves a project to its custom domain.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::NotFound`] if the project is not
    /// found or has no custom domain.
    /// Returns [`crate::error::ClientError::Upstream`] on transport or parse errors.
    async fn resolve_project_domain(&self, project_id: &str) -> ClientResult<String>;

    /// Resolves a page to its served filename and alias.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::NotFound`] if the page is not
    /// found or has no filename.
    /// Returns [`crate::error::ClientError::Upstream`] on transport or parse errors.
    async fn resolve_page_filenames(&self, page_id: &str) -> ClientResult<PageFilenames>;
}
