//! HTTP implementation of [`CmsClient`] for the Tilda API.

use super::schema::{PageInfo, ProjectInfo, TildaResponse};
use crate::domain::clients::CmsClient;
use crate::domain::entities::PageFilenames;
use crate::error::{ClientError, ClientResult};
use crate::infrastructure::http::normalize_base_url;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Production Tilda API endpoint.
pub const DEFAULT_TILDA_API_URL: &str = "https://api.tildacdn.info";

/// Tilda API client authenticated with a public/secret key pair.
///
/// The key pair travels as query parameters on every call, so request URLs
/// are never logged and are stripped from transport errors.
pub struct TildaClient {
    http: reqwest::Client,
    base_url: String,
    public_key: String,
    secret_key: String,
}

impl TildaClient {
    /// Creates a new Tilda client.
    ///
    /// # Arguments
    ///
    /// - `http` - shared HTTP client (carries the request timeout)
    /// - `base_url` - API root, e.g. [`DEFAULT_TILDA_API_URL`]
    /// - `public_key` / `secret_key` - project API credentials
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Calls `GET /v1/{method}/` with the credentials and one lookup parameter.
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: &str,
        lookup: (&str, &str),
    ) -> ClientResult<TildaResponse<T>> {
        let url = format!("{}/v1/{}/", self.base_url, method);
        debug!(method, "{}={}", lookup.0, lookup.1);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("publickey", self.public_key.as_str()),
                ("secretkey", self.secret_key.as_str()),
                lookup,
            ])
            .send()
            .await
            .map_err(|e| ClientError::upstream(format!("CMS request failed: {}", e.without_url())))?;

        response.json::<TildaResponse<T>>().await.map_err(|e| {
            ClientError::upstream(format!("CMS response is not valid: {}", e.without_url()))
        })
    }
}

#[async_trait]
impl CmsClient for TildaClient {
    async fn resolve_project_domain(&self, project_id: &str) -> ClientResult<String> {
        let response: TildaResponse<ProjectInfo> =
            self.fetch("getprojectinfo", ("projectid", project_id)).await?;

        if let Some(message) = response.message.as_deref() {
            warn!(project_id, "Tilda project lookup: {}", message);
        }

        response
            .found()
            .and_then(|info| info.customdomain)
            .filter(|domain| !domain.is_empty())
            .ok_or_else(|| ClientError::not_found("Failed to retrieve project domain"))
    }

    async fn resolve_page_filenames(&self, page_id: &str) -> ClientResult<PageFilenames> {
        let response: TildaResponse<PageInfo> =
            self.fetch("getpage", ("pageid", page_id)).await?;

        if let Some(message) = response.message.as_deref() {
            warn!(page_id, "Tilda page lookup: {}", message);
        }

        response
            .found()
            .and_then(|info| {
                info.filename
                    .filter(|filename| !filename.is_empty())
                    .map(|filename| PageFilenames::new(filename, info.alias))
            })
            .ok_or_else(|| ClientError::not_found("Failed to retrieve page filename"))
    }
}
