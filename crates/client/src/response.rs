//! HTTP response handling with Perigon-specific extensions.

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Wrapper around HTTP response with additional functionality.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    /// Create a new Response from a reqwest::Response.
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        let status = self.status();
        (200..300).contains(&status)
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        let value = self.header("retry-after")?;

        // Try parsing as seconds first
        if let Ok(seconds) = value.parse::<u64>() {
            return Some(Duration::from_secs(seconds));
        }

        // HTTP-date form is rare on this API; treat it as no hint
        None
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the response body as text.
    pub async fn text(self) -> Result<String> {
        self.inner.text().await.map_err(Into::into)
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<bytes::Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }

    /// Deserialize the response body as JSON.
    ///
    /// The body is buffered first so that shape mismatches surface as
    /// [`ErrorKind::Json`] rather than a transport error.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.bytes().await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }

    /// Convert a non-2xx response into the matching error.
    ///
    /// Successful responses pass through unchanged.
    pub async fn check_error(self) -> Result<Response> {
        if self.is_success() {
            return Ok(self);
        }

        let status = self.status();
        let retry_after = self.retry_after();
        let body = self.text().await.unwrap_or_default();
        Err(error_from_parts(status, retry_after, &body))
    }
}

/// Build the error for a failed response.
///
/// Shared by [`Response::check_error`] and the client retry loop, which
/// needs the status and Retry-After hint before consuming the body.
pub(crate) fn error_from_parts(status: u16, retry_after: Option<Duration>, body: &str) -> Error {
    if status == 429 {
        return Error::new(ErrorKind::RateLimited { retry_after });
    }

    // Perigon error bodies carry a message field alongside the status
    if let Ok(err) = serde_json::from_str::<PerigonErrorResponse>(body) {
        return Error::new(ErrorKind::Http {
            status,
            message: sanitize_error_message(&err.message),
        });
    }

    Error::new(ErrorKind::Http {
        status,
        message: sanitize_error_message(body),
    })
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// This function:
/// - Removes API keys echoed back in query strings or headers
/// - Truncates messages longer than 500 characters
fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    // Some gateways echo the full request URL, apiKey query param included
    let query_pattern = regex_lite::Regex::new(r"(?i)apiKey=[A-Za-z0-9-]+").unwrap();
    sanitized = query_pattern
        .replace_all(&sanitized, "apiKey=[REDACTED]")
        .to_string();

    // Header form: "x-api-key: <value>"
    let header_pattern = regex_lite::Regex::new(r"(?i)x-api-key[=:]\s*[A-Za-z0-9-]+").unwrap();
    sanitized = header_pattern
        .replace_all(&sanitized, "x-api-key: [REDACTED]")
        .to_string();

    if sanitized.len() > MAX_LENGTH {
        sanitized.truncate(MAX_LENGTH);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

/// Perigon API error response format.
#[derive(Debug, serde::Deserialize)]
struct PerigonErrorResponse {
    #[allow(dead_code)]
    status: Option<u16>,
    message: String,
}
