//! Request and response schemas for the Cloudflare v4 API.

use crate::domain::entities::ZoneSummary;
use serde::{Deserialize, Serialize};

/// Error or message entry of a Cloudflare response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    pub fn describe(&self) -> String {
        match self.code {
            Some(code) => format!("{}: {}", code, self.message),
            None => self.message.clone(),
        }
    }
}

/// Zone entry of `GET /client/v4/zones`.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneRecord {
    #[serde(default)]
    pub id: String,
}

impl From<ZoneRecord> for ZoneSummary {
    fn from(record: ZoneRecord) -> Self {
        ZoneSummary { id: record.id }
    }
}

/// Response of `GET /client/v4/zones?name=...`.
#[derive(Debug, Deserialize)]
pub struct ZoneListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub result: Option<Vec<ZoneRecord>>,
}

/// Body of `POST /client/v4/zones/{zone_id}/purge_cache`.
#[derive(Debug, Serialize)]
pub struct PurgeRequest<'a> {
    pub files: &'a [String],
}

/// Response of `POST /client/v4/zones/{zone_id}/purge_cache`.
#[derive(Debug, Deserialize)]
pub struct PurgeResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_list_parses() {
        let body = r#"{
            "success": true,
            "errors": [],
            "messages": [],
            "result": [{"id": "023e105f4ecef8ad9ca31a8372d0c353", "name": "example.com", "status": "active"}]
        }"#;
        let parsed: ZoneListResponse = serde_json::from_str(body).unwrap();

        assert!(parsed.success);
        let zones = parsed.result.unwrap();
        assert_eq!(zones[0].id, "023e105f4ecef8ad9ca31a8372d0c353");
    }

    #[test]
    fn test_purge_request_body() {
        let files = vec!["https://example.com/page1.html".to_string()];
        let body = serde_json::to_value(PurgeRequest { files: &files }).unwrap();

        assert_eq!(
            body,
            serde_json::json!({ "files": ["https://example.com/page1.html"] })
        );
    }

    #[test]
    fn test_error_description() {
        let body = r#"{"success": false, "errors": [{"code": 10000, "message": "Authentication error"}]}"#;
        let parsed: PurgeResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.success, Some(false));
        assert_eq!(parsed.errors[0].describe(), "10000: Authentication error");
    }
}
