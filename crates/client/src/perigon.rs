//! High-level Perigon client with typed HTTP methods.
//!
//! This module provides `PerigonClient`, which combines an API key with an
//! HTTP client and provides typed JSON methods for API interactions.
//!
//! ## Security
//!
//! - API keys are redacted in Debug output
//! - Sensitive parameters are skipped in tracing spans

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::client::PerigonHttpClient;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::DEFAULT_BASE_URL;

/// Environment variable consulted by [`PerigonClient::from_env`].
pub const API_KEY_ENV_VAR: &str = "PERIGON_API_KEY";

/// High-level Perigon API client.
///
/// This client combines an API key with HTTP infrastructure and provides
/// typed methods for making API requests. It's designed to be used by
/// higher-level API-specific crates such as perigon-news.
///
/// ## Security
///
/// The API key is redacted in Debug output to prevent accidental exposure
/// in logs.
///
/// # Example
///
/// ```rust,ignore
/// use perigon_client::PerigonClient;
///
/// let client = PerigonClient::from_env()?;
///
/// // GET with typed response
/// let page: SearchPage = client
///     .get_json("/v1/all", &[("q".to_string(), "fusion".to_string())])
///     .await?;
/// ```
#[derive(Clone)]
pub struct PerigonClient {
    http: PerigonHttpClient,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for PerigonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerigonClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl PerigonClient {
    /// Create a new Perigon client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Create a new Perigon client with custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = PerigonHttpClient::new(config)?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a client from the `PERIGON_API_KEY` environment variable.
    ///
    /// The key is used as given; validity is only established by the API
    /// itself on the first request.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV_VAR).map_err(|_| {
            Error::new(ErrorKind::Config(format!(
                "environment variable {} is not set",
                API_KEY_ENV_VAR
            )))
        })?;
        Self::new(api_key)
    }

    /// Point the client at a different base URL.
    ///
    /// Useful for tests and proxies. The URL must parse; a trailing slash
    /// is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the base URL.
    /// Otherwise, it's assumed to be a full URL.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Create a GET request builder with authentication.
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.http.get(url).api_key(&self.api_key)
    }

    /// Execute a request and return the raw response.
    pub async fn execute(&self, request: RequestBuilder) -> Result<crate::Response> {
        self.http.execute(request).await
    }

    /// GET request with query parameters and JSON response deserialization.
    #[instrument(skip(self, params), fields(path = %path))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let full_url = self.url(path);
        let request = self.get(&full_url).queries(params.to_vec());
        self.http.send_json(request).await
    }
}
