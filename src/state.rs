//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, PurgeService};
use crate::config::Config;
use crate::infrastructure::cloudflare::CloudflareClient;
use crate::infrastructure::http::build_http_client;
use crate::infrastructure::tilda::TildaClient;

/// Purge service wired to the real Tilda and Cloudflare APIs.
pub type HttpPurgeService = PurgeService<TildaClient, CloudflareClient>;

/// Immutable state shared by all requests.
#[derive(Clone)]
pub struct AppState {
    pub purge_service: Arc<HttpPurgeService>,
    pub auth_service: Arc<AuthService>,
    /// Answer 500 instead of 200 when the CDN rejects a purge.
    pub strict_purge: bool,
}

impl AppState {
    pub fn new(
        purge_service: Arc<HttpPurgeService>,
        auth_service: Arc<AuthService>,
        strict_purge: bool,
    ) -> Self {
        Self {
            purge_service,
            auth_service,
            strict_purge,
        }
    }

    /// Builds the clients and services described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let http = build_http_client(config.upstream_timeout())?;

        let tilda = Arc::new(TildaClient::new(
            http.clone(),
            config.cms_api_url.clone(),
            config.cms_public_key.clone(),
            config.cms_secret_key.clone(),
        ));
        let cloudflare = Arc::new(CloudflareClient::new(
            http,
            config.cdn_api_url.clone(),
            config.cdn_api_token.clone(),
        ));

        let purge_service = Arc::new(PurgeService::new(tilda, cloudflare));
        let auth_service = Arc::new(AuthService::new(config.cms_public_key.clone()));

        Ok(Self::new(purge_service, auth_service, config.strict_purge))
    }
}
