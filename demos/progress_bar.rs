//! Terminal progress reporting for paginated searches
//!
//! Attaches an indicatif progress bar that ticks once per fetched page.
//!
//! Run with: PERIGON_API_KEY="..." cargo run --example progress_bar --features indicatif

use chrono::{Days, Utc};
use tracing_subscriber::EnvFilter;

use perigon_api::client::API_KEY_ENV_VAR;
use perigon_api::news::TerminalProgress;
use perigon_api::{NewsClient, SearchQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Warn-level default so request logs stay off the bar's terminal
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("=== Paginated Search with a Progress Bar ===\n");

    let client = match NewsClient::from_env() {
        Ok(client) => client.with_progress(TerminalProgress::new()),
        Err(e) => {
            println!("✗ {e}");
            println!("  Tip: export {API_KEY_ENV_VAR} with a key from https://goperigon.com");
            return Ok(());
        }
    };

    // Broad enough that several pages come back
    let today = Utc::now().date_naive();
    let yesterday = today - Days::new(1);

    let query = SearchQuery::new()
        .q("technology")
        .from_date(yesterday)
        .to_date(today)
        .language("en");

    let articles: Vec<serde_json::Value> = client.search_all(&query).await?;

    println!("\n✓ Fetched {} articles", articles.len());

    Ok(())
}
