//! Perigon news search client.
//!
//! This client wraps `PerigonClient` from `perigon-client` and provides
//! typed search methods for the `/v1/all` endpoint, including automatic
//! sequential pagination with progress reporting.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, instrument};

use perigon_client::{ClientConfig, PerigonClient, Result};

use crate::progress::{NoopProgress, ProgressObserver};
use crate::query::{SearchPage, SearchQuery};

/// Path of the news listing endpoint.
pub const NEWS_ENDPOINT: &str = "/v1/all";

/// Perigon news search client.
///
/// Provides typed methods for news search:
/// - Single-page fetches (`search`, `search_page`)
/// - Full aggregation across all pages (`search_all`)
/// - Progress reporting for long paginated fetches
///
/// # Example
///
/// ```rust,ignore
/// use perigon_news::{NewsClient, SearchQuery};
///
/// let client = NewsClient::from_env()?;
///
/// let query = SearchQuery::new()
///     .q("renewable energy")
///     .language("en");
///
/// // First page only
/// let page: perigon_news::SearchPage = client.search(&query).await?;
///
/// // Everything, across pages
/// let articles: Vec<serde_json::Value> = client.search_all(&query).await?;
/// ```
#[derive(Clone)]
pub struct NewsClient {
    client: PerigonClient,
    progress: Arc<dyn ProgressObserver>,
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

impl NewsClient {
    /// Create a new news client with the given API key.
    ///
    /// The key is stored as given; the API itself decides validity.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = PerigonClient::new(api_key)?;
        Ok(Self::from_client(client))
    }

    /// Create a new news client with custom HTTP configuration.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let client = PerigonClient::with_config(api_key, config)?;
        Ok(Self::from_client(client))
    }

    /// Create a news client from the `PERIGON_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let client = PerigonClient::from_env()?;
        Ok(Self::from_client(client))
    }

    /// Create a news client from an existing PerigonClient.
    pub fn from_client(client: PerigonClient) -> Self {
        Self {
            client,
            progress: Arc::new(NoopProgress),
        }
    }

    /// Attach a progress observer for paginated searches.
    pub fn with_progress(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.progress = Arc::new(observer);
        self
    }

    /// Point the client at a different base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
        self.client = self.client.with_base_url(base_url)?;
        Ok(self)
    }

    /// Get the underlying PerigonClient.
    pub fn inner(&self) -> &PerigonClient {
        &self.client
    }

    /// Fetch the first page of results for the query.
    ///
    /// Use `search_all` to aggregate every page.
    #[instrument(skip(self, query))]
    pub async fn search<T: DeserializeOwned>(&self, query: &SearchQuery) -> Result<SearchPage<T>> {
        self.search_page(query, 0).await
    }

    /// Fetch one explicit page of results. Page 0 is the first page and
    /// travels without a `page` parameter.
    #[instrument(skip(self, query))]
    pub async fn search_page<T: DeserializeOwned>(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<SearchPage<T>> {
        let params = query.to_params(page);
        self.client.get_json(NEWS_ENDPOINT, &params).await
    }

    /// Fetch every page of results and aggregate the records in page order.
    ///
    /// The total page count comes from the first response's `numResults`;
    /// later responses' totals are ignored. Pages are fetched strictly
    /// sequentially. Any page's terminal failure aborts the whole call and
    /// drops the partial results.
    #[instrument(skip(self, query))]
    pub async fn search_all<T: DeserializeOwned>(&self, query: &SearchQuery) -> Result<Vec<T>> {
        let size = query.page_size() as u64;

        info!(size, "Executing initial search");
        let first: SearchPage<T> = self.search_page(query, 0).await?;
        let num_results = first.num_results;
        let mut records = first.articles;

        if size > 0 && num_results > size {
            let total_pages = num_results.div_ceil(size);
            let remaining = total_pages - 1;
            info!(num_results, pages = remaining, "Paginating remaining pages");

            self.progress.begin(remaining);
            for page in 1..total_pages {
                let next: SearchPage<T> = match self.search_page(query, page as u32).await {
                    Ok(next) => next,
                    Err(err) => {
                        self.progress.finish();
                        return Err(err);
                    }
                };
                records.extend(next.articles);
                self.progress.advance();
            }
            self.progress.finish();
        }

        Ok(records)
    }
}
