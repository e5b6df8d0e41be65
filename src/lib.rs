//! # perigon-api
//!
//! A Perigon News API client library for Rust.
//!
//! This library provides typed access to the Perigon `/v1/all` news search
//! endpoint with built-in authentication, retry logic, and pagination.
//!
//! ## Security
//!
//! - The API key is redacted in `Debug` output
//! - Tracing spans skip credential-bearing values
//! - Error messages redact credential fragments echoed by the remote API
//!
//! ## Crates
//!
//! - **perigon-client** - Core HTTP client infrastructure with retry and
//!   rate-limit handling
//! - **perigon-news** - News search: `/v1/all` queries with pagination and
//!   progress reporting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use perigon_api::{NewsClient, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads PERIGON_API_KEY from the environment
//!     let client = NewsClient::from_env()?;
//!
//!     let query = SearchQuery::new()
//!         .q("climate AND policy")
//!         .language("en");
//!
//!     // Fetches every page of results sequentially
//!     let articles: Vec<serde_json::Value> = client.search_all(&query).await?;
//!
//!     for article in articles {
//!         println!("{}", article["title"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export member crates for convenient access
#[cfg(feature = "client")]
pub use perigon_client as client;
#[cfg(feature = "news")]
pub use perigon_news as news;

// Most callers only need the news surface; surface its main types here.
#[cfg(feature = "news")]
pub use perigon_news::{NewsClient, SearchPage, SearchQuery};
