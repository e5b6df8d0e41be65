//! Mock-server tests for the full search flow.
//!
//! These exercise the crate end to end: query building, the retry
//! envelope, pagination, progress reporting, and error surfacing,
//! against a local wiremock server.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use perigon_api::client::{ClientConfig, ErrorKind, RetryConfig};
use perigon_api::news::ProgressObserver;
use perigon_api::{NewsClient, SearchPage, SearchQuery};

use super::common::init_tracing;

fn page_body(start: usize, count: usize, total: u64) -> serde_json::Value {
    let articles: Vec<serde_json::Value> = (start..start + count)
        .map(|i| serde_json::json!({"id": i, "title": format!("article {i}")}))
        .collect();
    serde_json::json!({"numResults": total, "articles": articles})
}

/// Observer that records every call for assertions.
#[derive(Default)]
struct CountingProgress {
    begun_with: Arc<AtomicU64>,
    advances: Arc<AtomicU64>,
    finishes: Arc<AtomicU64>,
}

impl ProgressObserver for CountingProgress {
    fn begin(&self, total_units: u64) {
        self.begun_with.store(total_units, Ordering::SeqCst);
    }

    fn advance(&self) {
        self.advances.fetch_add(1, Ordering::SeqCst);
    }

    fn finish(&self) {
        self.finishes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Page values observed on the wire, in request order.
async fn observed_pages(server: &MockServer) -> Vec<Option<String>> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .find_map(|(k, v)| (k == "page").then(|| v.into_owned()))
        })
        .collect()
}

#[tokio::test]
async fn test_search_all_end_to_end() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .and(header("x-api-key", "integration-key"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 100, 250)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .and(header("x-api-key", "integration-key"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(100, 100, 250)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .and(header("x-api-key", "integration-key"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(200, 50, 250)))
        .mount(&mock_server)
        .await;

    let observer = CountingProgress::default();
    let begun_with = observer.begun_with.clone();
    let advances = observer.advances.clone();
    let finishes = observer.finishes.clone();

    let client = NewsClient::with_config(
        "integration-key",
        ClientConfig::builder().without_retry().build(),
    )
    .unwrap()
    .with_base_url(mock_server.uri())
    .unwrap()
    .with_progress(observer);

    let query = SearchQuery::new()
        .q("olympics AND usa AND gold")
        .language("en");

    let articles: Vec<serde_json::Value> = client.search_all(&query).await.unwrap();

    // Everything, in page order then intra-page order
    assert_eq!(articles.len(), 250);
    let ids: Vec<u64> = articles
        .iter()
        .map(|a| a["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (0..250).collect::<Vec<u64>>());

    // Strictly ascending sequential page requests
    assert_eq!(
        observed_pages(&mock_server).await,
        vec![None, Some("1".to_string()), Some("2".to_string())]
    );

    // Full progress protocol
    assert_eq!(begun_with.load(Ordering::SeqCst), 2);
    assert_eq!(advances.load(Ordering::SeqCst), 2);
    assert_eq!(finishes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_reserved_params_overridden_on_wire() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .and(query_param("size", "2"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 2, 4)))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .and(query_param("size", "2"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(2, 2, 4)))
        .mount(&mock_server)
        .await;

    let client = NewsClient::with_config(
        "integration-key",
        ClientConfig::builder().without_retry().build(),
    )
    .unwrap()
    .with_base_url(mock_server.uri())
    .unwrap();

    // The caller tries to smuggle its own size and page
    let query = SearchQuery::new()
        .param("size", 7u32)
        .param("page", 9u32)
        .size(2);

    let articles: Vec<serde_json::Value> = client.search_all(&query).await.unwrap();
    assert_eq!(articles.len(), 4);

    // No request ever carried the smuggled values
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for request in &requests {
        assert!(!request.url.query_pairs().any(|(k, v)| k == "size" && v == "7"));
        assert!(!request.url.query_pairs().any(|(k, v)| k == "page" && v == "9"));
    }
}

#[tokio::test]
async fn test_transient_failure_recovers() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let call_count = Arc::new(AtomicU32::new(0));
    let call_count_clone = call_count.clone();

    // Two failures, then a clean single-page result
    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .respond_with(move |_: &wiremock::Request| {
            let count = call_count_clone.fetch_add(1, Ordering::SeqCst);
            if count < 2 {
                ResponseTemplate::new(503)
            } else {
                ResponseTemplate::new(200).set_body_json(page_body(0, 3, 3))
            }
        })
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .with_retry(
            RetryConfig::default()
                .with_initial_delay(Duration::from_millis(10))
                .with_max_delay(Duration::from_millis(40)),
        )
        .build();

    let client = NewsClient::with_config("integration-key", config)
        .unwrap()
        .with_base_url(mock_server.uri())
        .unwrap();

    let articles: Vec<serde_json::Value> =
        client.search_all(&SearchQuery::new()).await.unwrap();

    // Indistinguishable from immediate success
    assert_eq!(articles.len(), 3);
    assert_eq!(call_count.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_attempt_budget_exhaustion() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    // Default envelope accounting, shrunk waits
    let config = ClientConfig::builder()
        .with_retry(RetryConfig::default().with_initial_delay(Duration::from_millis(1)))
        .build();

    let client = NewsClient::with_config("integration-key", config)
        .unwrap()
        .with_base_url(mock_server.uri())
        .unwrap();

    let result: Result<SearchPage, _> = client.search(&SearchQuery::new()).await;

    let err = result.unwrap_err();
    assert!(
        matches!(err.kind, ErrorKind::RetriesExhausted { attempts: 10 }),
        "expected exhaustion after 10 attempts, got {:?}",
        err.kind
    );

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 10);
}

#[tokio::test]
async fn test_missing_fields_fail_without_retry() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok"
        })))
        .mount(&mock_server)
        .await;

    // Full default envelope: a decode failure must bypass it entirely
    let client = NewsClient::new("integration-key")
        .unwrap()
        .with_base_url(mock_server.uri())
        .unwrap();

    let result: Result<SearchPage, _> = client.search(&SearchQuery::new()).await;

    assert!(matches!(result.unwrap_err().kind, ErrorKind::Json(_)));
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
}
