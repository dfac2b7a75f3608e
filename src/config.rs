//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then injected
//! into the API clients. Nothing reads the environment mid-request.
//!
//! ## Required Variables
//!
//! ```bash
//! export CLOUDFLARE_API_TOKEN="..."   # Zone:Read + Cache Purge
//! export TILDA_PUBLIC_KEY="..."
//! export TILDA_SECRET_KEY="..."
//! ```
//!
//! `TILDA_PUBLIC_KEY` doubles as the shared secret: webhook calls must carry
//! it in the `publickey` query parameter.
//!
//! ## Optional Variables
//!
//! - `TILDA_API_URL` - Tilda API root (default: `https://api.tildacdn.info`)
//! - `CLOUDFLARE_API_URL` - Cloudflare API root (default: `https://api.cloudflare.com`)
//! - `UPSTREAM_TIMEOUT_SECS` - Timeout for each outbound call (default: 10, max: 300)
//! - `PURGE_STRICT` - Answer 500 when Cloudflare rejects a purge (default: `false`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use crate::infrastructure::cloudflare::DEFAULT_CLOUDFLARE_API_URL;
use crate::infrastructure::tilda::DEFAULT_TILDA_API_URL;
use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Cloudflare API bearer token (`CLOUDFLARE_API_TOKEN`).
    pub cdn_api_token: String,
    /// Tilda public key (`TILDA_PUBLIC_KEY`), also the webhook shared secret.
    pub cms_public_key: String,
    /// Tilda secret key (`TILDA_SECRET_KEY`).
    pub cms_secret_key: String,
    pub cms_api_url: String,
    pub cdn_api_url: String,
    pub upstream_timeout_secs: u64,
    /// When true, a purge rejected by Cloudflare is answered with 500
    /// instead of 200.
    pub strict_purge: bool,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("cdn_api_token", &mask_secret(&self.cdn_api_token))
            .field("cms_public_key", &mask_secret(&self.cms_public_key))
            .field("cms_secret_key", &mask_secret(&self.cms_secret_key))
            .field("cms_api_url", &self.cms_api_url)
            .field("cdn_api_url", &self.cdn_api_url)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .field("strict_purge", &self.strict_purge)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the three API credentials is missing.
    pub fn from_env() -> Result<Self> {
        let cdn_api_token =
            env::var("CLOUDFLARE_API_TOKEN").context("CLOUDFLARE_API_TOKEN must be set")?;
        let cms_public_key =
            env::var("TILDA_PUBLIC_KEY").context("TILDA_PUBLIC_KEY must be set")?;
        let cms_secret_key =
            env::var("TILDA_SECRET_KEY").context("TILDA_SECRET_KEY must be set")?;

        let cms_api_url =
            env::var("TILDA_API_URL").unwrap_or_else(|_| DEFAULT_TILDA_API_URL.to_string());
        let cdn_api_url = env::var("CLOUDFLARE_API_URL")
            .unwrap_or_else(|_| DEFAULT_CLOUDFLARE_API_URL.to_string());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let strict_purge = env::var("PURGE_STRICT")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            cdn_api_token,
            cms_public_key,
            cms_secret_key,
            cms_api_url,
            cdn_api_url,
            upstream_timeout_secs,
            strict_purge,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - any credential is empty
    /// - an API URL is not an absolute `http`/`https` URL
    /// - `upstream_timeout_secs` is outside `1..=300`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.cdn_api_token.is_empty() {
            anyhow::bail!("CLOUDFLARE_API_TOKEN must not be empty");
        }
        if self.cms_public_key.is_empty() {
            anyhow::bail!("TILDA_PUBLIC_KEY must not be empty");
        }
        if self.cms_secret_key.is_empty() {
            anyhow::bail!("TILDA_SECRET_KEY must not be empty");
        }

        validate_api_url("TILDA_API_URL", &self.cms_api_url)?;
        validate_api_url("CLOUDFLARE_API_URL", &self.cdn_api_url)?;

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > 300 {
            anyhow::bail!(
                "UPSTREAM_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.upstream_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        self.socket_addr()?;

        Ok(())
    }

    /// Parses `listen_addr` into the address the server binds to.
    ///
    /// # Errors
    ///
    /// Returns an error unless `listen_addr` is an `ip:port` pair.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().with_context(|| {
            format!(
                "LISTEN must be in format 'ip:port', got '{}'",
                self.listen_addr
            )
        })
    }

    /// Timeout applied to each outbound API call.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Tilda API: {}", self.cms_api_url);
        tracing::info!("  Tilda public key: {}", mask_secret(&self.cms_public_key));
        tracing::info!("  Cloudflare API: {}", self.cdn_api_url);
        tracing::info!("  Cloudflare token: {}", mask_secret(&self.cdn_api_token));
        tracing::info!("  Upstream timeout: {}s", self.upstream_timeout_secs);
        tracing::info!("  Strict purge: {}", self.strict_purge);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_api_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{} must use http or https, got '{}'", name, value);
    }

    Ok(())
}

/// Masks a secret for logging, keeping only its first four characters.
///
/// - `abcdef123456` → `abcd***`
/// - `abc` → `***`
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        return "***".to_string();
    }

    let prefix: String = secret.chars().take(4).collect();
    format!("{}***", prefix)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
