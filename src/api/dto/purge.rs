//! Query parameters of the purge webhook.

use url::form_urlencoded;

/// Parameters Tilda sends with its page-published webhook.
///
/// Empty values are treated like absent ones. When a key is repeated, the
/// first occurrence wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PurgeParams {
    pub pageid: Option<String>,
    pub projectid: Option<String>,
    pub publickey: Option<String>,
}

/// Validated webhook parameters, all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeRequest {
    pub page_id: String,
    pub project_id: String,
    pub public_key: String,
}

impl PurgeParams {
    /// Parses a raw (still percent-encoded) query string.
    pub fn from_query(query: Option<&str>) -> Self {
        let mut params = Self::default();

        for (key, value) in form_urlencoded::parse(query.unwrap_or_default().as_bytes()) {
            let slot = match &*key {
                "pageid" => &mut params.pageid,
                "projectid" => &mut params.projectid,
                "publickey" => &mut params.publickey,
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    /// Returns the validated request if all three parameters are present.
    pub fn require_all(self) -> Option<PurgeRequest> {
        Some(PurgeRequest {
            page_id: self.pageid?,
            project_id: self.projectid?,
            public_key: self.publickey?,
        })
    }
}
