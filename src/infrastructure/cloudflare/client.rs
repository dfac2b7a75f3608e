//! HTTP implementation of [`CdnClient`] for the Cloudflare v4 API.

use super::schema::{ApiMessage, PurgeRequest, PurgeResponse, ZoneListResponse};
use crate::domain::clients::CdnClient;
use crate::domain::entities::{PurgeOutcome, ZoneId, ZoneSummary, select_zone};
use crate::error::{ClientError, ClientResult};
use crate::infrastructure::http::normalize_base_url;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Production Cloudflare API endpoint.
pub const DEFAULT_CLOUDFLARE_API_URL: &str = "https://api.cloudflare.com";

/// Cloudflare API client authenticated with a bearer API token.
///
/// The token needs the `Zone:Read` and `Cache Purge` permissions.
pub struct CloudflareClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl CloudflareClient {
    /// Creates a new Cloudflare client.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
            token: token.into(),
        }
    }

    fn transport_error(e: reqwest::Error) -> ClientError {
        ClientError::upstream(format!("CDN request failed: {}", e))
    }
}

fn describe_errors(errors: &[ApiMessage]) -> Vec<String> {
    errors.iter().map(ApiMessage::describe).collect()
}

#[async_trait]
impl CdnClient for CloudflareClient {
    async fn resolve_zone_id(&self, domain: &str) -> ClientResult<ZoneId> {
        let url = format!("{}/client/v4/zones", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("name", domain)])
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(Self::transport_error)?;

        let listing: ZoneListResponse = response.json().await.map_err(|e| {
            ClientError::upstream(format!("CDN response is not valid: {}", e))
        })?;

        if !listing.success {
            warn!(
                domain,
                errors = ?describe_errors(&listing.errors),
                "Zone lookup was not successful"
            );
        }

        let zones: Vec<ZoneSummary> = if listing.success {
            listing
                .result
                .unwrap_or_default()
                .into_iter()
                .map(ZoneSummary::from)
                .collect()
        } else {
            Vec::new()
        };

        if zones.len() > 1 {
            warn!(domain, count = zones.len(), "Several zones match, using the first");
        }

        select_zone(&zones).ok_or_else(|| {
            ClientError::not_found(format!("Zone ID not found for domain {}", domain))
        })
    }

    async fn purge_urls(&self, zone_id: &ZoneId, urls: &[String]) -> ClientResult<PurgeOutcome> {
        let url = format!("{}/client/v4/zones/{}/purge_cache", self.base_url, zone_id);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&PurgeRequest { files: urls })
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body: PurgeResponse = response.json().await.map_err(|e| {
            ClientError::upstream(format!("CDN response is not valid: {}", e))
        })?;

        if status.is_success() && body.success != Some(false) {
            info!("Cache purged successfully for {}", urls.join(", "));
            return Ok(PurgeOutcome::Purged);
        }

        let errors = describe_errors(&body.errors);

        error!(
            zone_id = %zone_id,
            status = status.as_u16(),
            errors = ?errors,
            "Failed to purge cache"
        );

        Ok(PurgeOutcome::Rejected {
            status: status.as_u16(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> CloudflareClient {
        CloudflareClient::new(reqwest::Client::new(), server.uri(), "cf-token")
    }

    #[tokio::test]
    async fn test_resolve_zone_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/client/v4/zones"))
            .and(query_param("name", "example.com"))
            .and(header("authorization", "Bearer cf-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "errors": [],
                "result": [{ "id": "zone-1", "name": "example.com" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let zone = client(&server).resolve_zone_id("example.com").await.unwrap();

        assert_eq!(zone, ZoneId::new("zone-1"));
    }

    #[tokio::test]
    async fn test_first_zone_wins() {
        let server = MockServer::start().await;

        Mock::given(path("/client/v4/zones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "result": [
                    { "id": "zone-1", "name": "example.com" },
                    { "id": "zone-2", "name": "example.com" }
                ]
            })))
            .mount(&server)
            .await;

        let zone = client(&server).resolve_zone_id("example.com").await.unwrap();

        assert_eq!(zone.as_str(), "zone-1");
    }

    #[tokio::test]
    async fn test_empty_zone_list() {
        let server = MockServer::start().await;

        Mock::given(path("/client/v4/zones"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "result": []
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .resolve_zone_id("example.com")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::not_found("Zone ID not found for domain example.com")
        );
    }

    #[tokio::test]
    async fn test_unsuccessful_zone_lookup() {
        let server = MockServer::start().await;

        Mock::given(path("/client/v4/zones"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "success": false,
                "errors": [{ "code": 9109, "message": "Invalid access token" }],
                "result": [{ "id": "zone-1" }]
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .resolve_zone_id("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_purge_urls() {
        let server = MockServer::start().await;
        let urls = vec![
            "https://example.com/page1.html".to_string(),
            "https://example.com/p1".to_string(),
        ];

        Mock::given(method("POST"))
            .and(path("/client/v4/zones/zone-1/purge_cache"))
            .and(header("authorization", "Bearer cf-token"))
            .and(body_json(json!({ "files": urls })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "errors": [],
                "result": { "id": "zone-1" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = client(&server)
            .purge_urls(&ZoneId::new("zone-1"), &urls)
            .await
            .unwrap();

        assert_eq!(outcome, PurgeOutcome::Purged);
    }

    #[tokio::test]
    async fn test_rejected_purge_is_not_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/client/v4/zones/zone-1/purge_cache"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "success": false,
                "errors": [{ "code": 1012, "message": "Request must contain one of \"purge_everything\", \"files\"" }]
            })))
            .mount(&server)
            .await;

        let outcome = client(&server)
            .purge_urls(&ZoneId::new("zone-1"), &["https://example.com/a".to_string()])
            .await
            .unwrap();

        match outcome {
            PurgeOutcome::Rejected { status, errors } => {
                assert_eq!(status, 400);
                assert_eq!(errors.len(), 1);
                assert!(errors[0].starts_with("1012"));
            }
            PurgeOutcome::Purged => panic!("expected rejection"),
        }
    }

    #[tokio::test]
    async fn test_purge_without_json_body_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server)
            .purge_urls(&ZoneId::new("zone-1"), &["https://example.com/a".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Upstream(_)));
        assert!(err.to_string().starts_with("CDN response is not valid"));
    }

    #[tokio::test]
    async fn test_failed_purge_without_json_body_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let err = client(&server)
            .purge_urls(&ZoneId::new("zone-1"), &["https://example.com/a".to_string()])
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_zone_lookup_malformed_body_is_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(path("/client/v4/zones"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = client(&server)
            .resolve_zone_id("example.com")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Upstream(_)));
        assert!(err.to_string().starts_with("CDN response is not valid"));
    }

    #[tokio::test]
    async fn test_unreachable_cdn_is_upstream_error() {
        let client =
            CloudflareClient::new(reqwest::Client::new(), "http://127.0.0.1:9", "cf-token");

        let zone_err = client.resolve_zone_id("example.com").await.unwrap_err();
        let purge_err = client
            .purge_urls(&ZoneId::new("zone-1"), &["https://example.com/a".to_string()])
            .await
            .unwrap_err();

        assert!(zone_err.to_string().starts_with("CDN request failed"));
        assert!(purge_err.to_string().starts_with("CDN request failed"));
    }
}
