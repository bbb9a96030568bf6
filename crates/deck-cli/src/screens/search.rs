//! Search screen: ticker lookup and search history

use crate::context::App;
use crate::render::format_table;
use anyhow::Result;

/// Search stocks by symbol or company name.
///
/// Empty input short-circuits without touching the server or the history.
/// A failed search degrades to an empty result list (logged, non-blocking);
/// the submitted query is recorded to history either way, matching the
/// submission-counts-not-results rule.
pub async fn run(app: &App, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        println!("Search for stocks");
        println!("Enter a ticker symbol or company name");
        return Ok(());
    }

    let results = match app.api.search(query).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(query, error = %e, "search failed");
            Vec::new()
        }
    };

    app.store.record_search(query).await?;

    if results.is_empty() {
        println!("No results found");
        println!("Try searching with a different term");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                r.ticker.clone(),
                r.name.clone(),
                exchange_display_name(&r.exchange).to_string(),
                r.kind.clone(),
            ]
        })
        .collect();

    print!("{}", format_table(&["Ticker", "Name", "Exchange", "Type"], &rows));
    println!("\nView one with: stockdeck view <ticker>");
    Ok(())
}

/// Show or clear the recent-searches list
pub async fn history(app: &App, clear: bool) -> Result<()> {
    if clear {
        app.store.clear_search_history().await?;
        println!("Search history cleared");
        return Ok(());
    }

    let history = app.store.search_history().await;
    if history.is_empty() {
        println!("No recent searches");
        return Ok(());
    }

    println!("Recent Searches");
    for query in history {
        println!("  {query}");
    }
    Ok(())
}

/// Human-readable exchange names for the region codes the search endpoint
/// returns; unknown codes pass through
fn exchange_display_name(exchange: &str) -> &str {
    match exchange {
        "US" => "NASDAQ",
        "UK" => "LSE",
        "JP" => "TSE",
        "EU" | "FR" => "EPA",
        "CA" => "TSX",
        "HK" => "HKEX",
        "AU" => "ASX",
        "IN" => "NSE",
        "SG" => "SGX",
        "DE" => "XETRA",
        other => other,
    }
}
