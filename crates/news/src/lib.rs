//! # perigon-news
//!
//! Perigon news search client for the `/v1/all` endpoint.
//!
//! ## Features
//!
//! - **Typed queries** - fluent `SearchQuery` builder over the endpoint's
//!   filter parameters, with an open escape hatch for anything undocumented
//! - **Pagination** - `search_all` walks every page sequentially and
//!   aggregates the records in order
//! - **Progress reporting** - observer seam for long paginated fetches,
//!   with an optional `indicatif` terminal bar
//! - **Retry** - every page request rides the `perigon-client` retry
//!   envelope (10 attempts, exponential backoff)
//!
//! ## Example
//!
//! ```rust,ignore
//! use perigon_news::{NewsClient, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), perigon_news::Error> {
//!     let client = NewsClient::from_env()?;
//!
//!     let query = SearchQuery::new()
//!         .q("electric vehicles")
//!         .language("en")
//!         .exclude_label("Opinion");
//!
//!     // First page only
//!     let page: perigon_news::SearchPage = client.search(&query).await?;
//!     println!("{} of {} articles", page.articles.len(), page.num_results);
//!
//!     // Everything, across pages
//!     let articles: Vec<serde_json::Value> = client.search_all(&query).await?;
//!     println!("{} articles total", articles.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod progress;
mod query;

// Main client
pub use client::{NewsClient, NEWS_ENDPOINT};

// Progress reporting
pub use progress::{NoopProgress, ProgressObserver};

#[cfg(feature = "indicatif")]
pub use progress::TerminalProgress;

// Query types
pub use query::{ParamValue, SearchPage, SearchQuery, DEFAULT_PAGE_SIZE};

// Re-export perigon-client types that users might need
pub use perigon_client::{ClientConfig, ClientConfigBuilder, Error, ErrorKind, Result};
