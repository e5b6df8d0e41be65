//! News search examples for the Perigon API
//!
//! This example demonstrates:
//! - Building a client from the environment
//! - Single-page searches with typed filters
//! - Deserializing into your own record types
//! - Automatic pagination across the full result set
//!
//! Run with: PERIGON_API_KEY="..." cargo run --example search

use chrono::{Days, Utc};
use serde::Deserialize;

use perigon_api::client::API_KEY_ENV_VAR;
use perigon_api::{NewsClient, SearchPage, SearchQuery};

/// Minimal article record for typed queries
///
/// Use typed structs when you know which fields you need; unmatched
/// response fields are simply ignored.
#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    url: String,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source: Option<ArticleSource>,
}

/// Nested source reference in an article
#[derive(Debug, Deserialize)]
struct ArticleSource {
    domain: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    println!("=== Perigon News Search Examples ===\n");

    let client = match NewsClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("✗ {e}");
            println!("  Tip: export {API_KEY_ENV_VAR} with a key from https://goperigon.com");
            return Ok(());
        }
    };

    example_single_page(&client).await?;
    example_typed_records(&client).await?;
    example_paginated(&client).await?;

    println!("\n✓ All search examples completed");

    Ok(())
}

/// Example 1: One page of results with typed filters
async fn example_single_page(client: &NewsClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 1: Single Page Search");
    println!("-----------------------------");

    let today = Utc::now().date_naive();
    let week_ago = today - Days::new(7);

    let query = SearchQuery::new()
        .q("artificial intelligence")
        .from_date(week_ago)
        .to_date(today)
        .language("en")
        .exclude_label("Opinion")
        .size(10);

    let page: SearchPage = client.search(&query).await?;

    println!(
        "✓ {} total matches, showing {}",
        page.num_results,
        page.articles.len()
    );
    for article in &page.articles {
        let title = article
            .get("title")
            .and_then(|v| v.as_str())
            .unwrap_or("(untitled)");
        println!("  - {title}");
    }
    println!();

    Ok(())
}

/// Example 2: Deserialize straight into your own record type
async fn example_typed_records(client: &NewsClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 2: Typed Records");
    println!("------------------------");

    let query = SearchQuery::new()
        .q("space launch")
        .language("en")
        .sort_by("date")
        .size(5);

    let page: SearchPage<Article> = client.search(&query).await?;

    println!("✓ Latest {} matching articles", page.articles.len());
    for article in &page.articles {
        let domain = article
            .source
            .as_ref()
            .map(|s| s.domain.as_str())
            .unwrap_or("unknown");
        let date = article.pub_date.as_deref().unwrap_or("no date");
        println!("  - [{domain}] {} ({date})", article.title);
        println!("    {}", article.url);
    }
    println!();

    Ok(())
}

/// Example 3: Fetch every page for a narrow query
async fn example_paginated(client: &NewsClient) -> Result<(), Box<dyn std::error::Error>> {
    println!("Example 3: Automatic Pagination");
    println!("-------------------------------");

    let today = Utc::now().date_naive();
    let yesterday = today - Days::new(1);

    let query = SearchQuery::new()
        .q("\"renewable energy\"")
        .from_date(yesterday)
        .to_date(today)
        .language("en");

    // search_all walks every page and returns the concatenated records
    let articles: Vec<serde_json::Value> = client.search_all(&query).await?;

    println!("✓ Collected {} articles across all pages", articles.len());
    println!();

    Ok(())
}
