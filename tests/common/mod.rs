#![allow(dead_code)]

use axum_test::TestServer;
use serde_json::json;
use tilda_cf_purge::config::Config;
use tilda_cf_purge::routes::app_router;
use tilda_cf_purge::state::AppState;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const PUBLIC_KEY: &str = "tilda-public";
pub const SECRET_KEY: &str = "tilda-secret";
pub const CF_TOKEN: &str = "cf-token";

pub fn test_config(upstream: &MockServer, strict_purge: bool) -> Config {
    Config {
        cdn_api_token: CF_TOKEN.to_string(),
        cms_public_key: PUBLIC_KEY.to_string(),
        cms_secret_key: SECRET_KEY.to_string(),
        cms_api_url: upstream.uri(),
        cdn_api_url: upstream.uri(),
        upstream_timeout_secs: 5,
        strict_purge,
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
    }
}

/// Serves the real router, with both APIs pointed at `upstream`.
pub fn create_test_server(upstream: &MockServer, strict_purge: bool) -> TestServer {
    let state = AppState::from_config(&test_config(upstream, strict_purge)).unwrap();
    TestServer::new(app_router(state)).unwrap()
}

pub async fn mock_project(upstream: &MockServer, project_id: &str, domain: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/getprojectinfo/"))
        .and(query_param("publickey", PUBLIC_KEY))
        .and(query_param("secretkey", SECRET_KEY))
        .and(query_param("projectid", project_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "FOUND",
            "result": { "id": project_id, "customdomain": domain }
        })))
        .mount(upstream)
        .await;
}

pub async fn mock_page(upstream: &MockServer, page_id: &str, filename: &str, alias: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/getpage/"))
        .and(query_param("pageid", page_id))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "FOUND",
            "result": { "id": page_id, "filename": filename, "alias": alias }
        })))
        .mount(upstream)
        .await;
}

pub async fn mock_zone(upstream: &MockServer, domain: &str, zone_id: &str) {
    Mock::given(method("GET"))
        .and(path("/client/v4/zones"))
        .and(query_param("name", domain))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "errors": [],
            "result": [{ "id": zone_id, "name": domain }]
        })))
        .mount(upstream)
        .await;
}

pub fn purge_path(zone_id: &str) -> String {
    format!("/client/v4/zones/{}/purge_cache", zone_id)
}

pub fn purge_success() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "errors": [],
        "result": { "id": "purge-1" }
    }))
}

/// Number of requests the mock upstream has received.
pub async fn upstream_calls(upstream: &MockServer) -> usize {
    upstream
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
