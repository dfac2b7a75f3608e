//! Shared outbound HTTP client.

use std::time::Duration;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the `reqwest` client shared by both API clients.
///
/// `timeout` bounds each outbound request end to end (connect, send and
/// body read).
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Strips trailing slashes so paths can be appended with `format!`.
pub(crate) fn normalize_base_url(base_url: impl Into<String>) -> String {
    let mut base = base_url.into();
    while base.ends_with('/') {
        base.pop();
    }
    base
}
