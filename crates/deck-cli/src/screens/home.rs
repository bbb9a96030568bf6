//! Home screen: the recent-stocks list

use crate::context::App;
use anyhow::Result;
use deck_api::Period;
use deck_store::RecentStock;
use deck_utils::{format_change, format_price};

/// Quotes are fetched for this many list entries per refresh; the rest render
/// without live data
const QUOTE_LOAD_LIMIT: usize = 5;

/// List recently viewed stocks, most recent first, with current quotes for
/// the first few entries
pub async fn run(app: &App) -> Result<()> {
    let recents = app.store.recent_stocks().await;

    if recents.is_empty() {
        println!("No recent stocks");
        println!("Search for stocks to get started: stockdeck search <query>");
        return Ok(());
    }

    println!("Your recent stocks\n");
    for (index, stock) in recents.iter().enumerate() {
        if index < QUOTE_LOAD_LIMIT {
            print_card_with_quote(app, stock).await;
        } else {
            println!("{}  {}", stock.ticker, stock.name);
        }
    }

    Ok(())
}

/// Remove a stock from the recent list
pub async fn remove(app: &App, ticker: &str) -> Result<()> {
    let ticker = ticker.to_uppercase();
    app.store.remove_stock(&ticker).await?;
    app.quotes.invalidate(&ticker).await;
    println!("Removed {ticker} from recent stocks");
    Ok(())
}

async fn print_card_with_quote(app: &App, stock: &RecentStock) {
    let quote = app
        .quotes
        .get_or_fetch(&stock.ticker, || {
            app.api.stock_data(&stock.ticker, Period::default())
        })
        .await;

    match quote {
        Ok(data) => {
            println!(
                "{}  {}  [{}]\n    {}  {}",
                data.ticker,
                data.name,
                data.market_state,
                format_price(data.current_price, &data.currency),
                format_change(data.change, data.change_percent),
            );
        }
        Err(e) => {
            tracing::warn!(ticker = %stock.ticker, error = %e, "failed to load quote");
            println!("{}  {}  (quote unavailable)", stock.ticker, stock.name);
        }
    }
}
