//! # perigon-client
//!
//! Core HTTP client infrastructure for the Perigon API.
//!
//! This crate provides the foundational HTTP client with:
//! - Automatic retry with exponential backoff
//! - Compression support (gzip, deflate)
//! - Rate limit detection and handling
//! - Connection pooling
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (perigon-news)                                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PerigonClient                            │
//! │  - Holds API key + HTTP client                              │
//! │  - Provides typed JSON methods (get_json)                   │
//! │  - Handles authentication headers                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PerigonHttpClient                          │
//! │  - Raw HTTP with retry, compression, rate limiting          │
//! │  - Request building                                         │
//! │  - Response handling                                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use perigon_client::PerigonClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), perigon_client::Error> {
//!     let client = PerigonClient::from_env()?;
//!
//!     // Typed JSON request
//!     let page: serde_json::Value = client
//!         .get_json("/v1/all", &[("q".to_string(), "fusion".to_string())])
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod perigon;
mod request;
mod response;
mod retry;

pub use client::PerigonHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use perigon::{PerigonClient, API_KEY_ENV_VAR};
pub use request::RequestBuilder;
pub use response::Response;
pub use retry::{BackoffStrategy, RetryConfig, RetryPolicy};

/// Default Perigon API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.goperigon.com";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("perigon-api/", env!("CARGO_PKG_VERSION"));
