//! API location configuration.
//!
//! The base URL is read once at startup and passed explicitly to
//! `ContentClient` and `AssetResolver`; nothing in the crate reads the
//! environment on its own.

use url::Url;

use crate::error::{ApiError, Result};

/// Base URL used when `API_BASE_URL` is unset or blank.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable holding the API base URL.
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Where the content API lives and where its stored assets are served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    asset_origin: String,
}

impl ApiConfig {
    /// Normalize `raw` into a config.
    ///
    /// Trailing slashes are stripped. The asset origin is the base URL with a
    /// single trailing `/api` segment removed, so `https://x.test/api` serves
    /// assets from `https://x.test`.
    pub fn new(raw: &str) -> Result<Self> {
        let base_url = raw.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::config("API base URL is empty"));
        }
        Url::parse(&base_url)
            .map_err(|e| ApiError::config(format!("invalid API base URL {base_url:?}: {e}")))?;

        let asset_origin = base_url
            .strip_suffix("/api")
            .unwrap_or(&base_url)
            .to_string();

        Ok(Self {
            base_url,
            asset_origin,
        })
    }

    /// Load from `API_BASE_URL`, falling back to [`DEFAULT_API_BASE_URL`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`ApiConfig::from_env`] but with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(API_BASE_URL_ENV) {
            Some(raw) if !raw.trim().is_empty() => Self::new(&raw),
            _ => Self::new(DEFAULT_API_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn asset_origin(&self) -> &str {
        &self.asset_origin
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_origin: "http://localhost:8000".to_string(),
        }
    }
}
