//! Live tests against the real Perigon API.
//!
//! All tests here are `#[ignore]`d; run them explicitly with a valid
//! key:
//!
//! ```bash
//! PERIGON_API_KEY="..." cargo test --test integration -- --ignored --nocapture
//! ```

use perigon_api::{NewsClient, SearchPage, SearchQuery};

use super::common::{api_key, init_tracing};

/// Editorial labels excluded from every live query to keep results
/// comparable across runs.
const EXCLUDED_LABELS: [&str; 5] = [
    "Non-news",
    "Opinion",
    "Fact Check",
    "Roundup",
    "Low Content",
];

fn live_client() -> NewsClient {
    NewsClient::new(api_key()).expect("Failed to create news client")
}

#[tokio::test]
#[ignore = "requires PERIGON_API_KEY and network access"]
async fn test_live_first_page_fills_to_size() {
    init_tracing();
    let client = live_client();

    // Broad enough to guarantee a full first page
    let query = SearchQuery::new()
        .content("olympics AND usa AND gold")
        .param("from", "2024-08-01")
        .param("to", "2024-08-08")
        .language("en")
        .param("excludeLabel", EXCLUDED_LABELS.to_vec());

    let page: SearchPage = client.search(&query).await.expect("Search request failed");

    println!("Matched {} articles in total", page.num_results);
    assert_eq!(
        page.articles.len(),
        100,
        "a broad query should fill the first page"
    );
    assert!(page.num_results >= 100);
}

#[tokio::test]
#[ignore = "requires PERIGON_API_KEY and network access"]
async fn test_live_pagination_exceeds_page_size() {
    init_tracing();
    let client = live_client();

    let query = SearchQuery::new()
        .content("\"simone\" AND \"biles\" AND \"gold\"")
        .param("from", "2024-08-07")
        .param("to", "2024-08-08")
        .language("en")
        .param("excludeLabel", EXCLUDED_LABELS.to_vec());

    let articles: Vec<serde_json::Value> = client
        .search_all(&query)
        .await
        .expect("Paginated search failed");

    println!("Fetched {} articles across all pages", articles.len());
    assert!(
        articles.len() > 100,
        "expected more than one page of articles, got {}",
        articles.len()
    );
}

#[tokio::test]
#[ignore = "requires PERIGON_API_KEY and network access"]
async fn test_live_from_env_constructor() {
    init_tracing();
    // Panics with setup instructions when the key is missing
    let _ = api_key();

    let client = NewsClient::from_env().expect("Failed to build client from environment");
    assert!(!client.inner().api_key().is_empty());
}
