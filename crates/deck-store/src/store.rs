//! Recency and search-history tracking
//!
//! Two size-bounded lists live in local storage: recently viewed stocks
//! (capped at 20) and recent search queries (capped at 10). Both are ordered
//! most-recent-first with no duplicate keys; a repeated entry moves to the
//! front instead of appearing twice, and every mutation persists the full
//! list before returning. Position in the list is the recency signal; recent
//! stocks additionally keep a view timestamp for display.

use crate::error::Result;
use crate::storage::Storage;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Storage key for the recent-stocks list
pub const RECENT_STOCKS_KEY: &str = "recentStocks";

/// Storage key for the search-history list
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";

/// Capacity bound of the recent-stocks list
pub const MAX_RECENT_STOCKS: usize = 20;

/// Capacity bound of the search-history list
pub const MAX_SEARCH_HISTORY: usize = 10;

/// Current persisted blob format version
const FORMAT_VERSION: u32 = 1;

/// A recently viewed stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentStock {
    pub ticker: String,
    pub name: String,
    /// Epoch millis of the last view; not used for ordering
    #[serde(rename = "lastViewed")]
    pub last_viewed: i64,
}

/// Versioned envelope around a persisted list.
///
/// Blobs written before the envelope existed were bare arrays; those still
/// load (as version-0 data) and are upgraded on the next write.
#[derive(Debug, Serialize, Deserialize)]
struct Persisted<T> {
    version: u32,
    items: Vec<T>,
}

/// Durable, ordered, size-bounded tracking of user interaction history
pub struct HistoryStore {
    storage: Arc<dyn Storage>,
}

impl HistoryStore {
    /// Create a store over the given storage substrate
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Record that a stock was viewed: move-to-front with a fresh timestamp,
    /// truncate to capacity, persist
    pub async fn record_stock_view(&self, ticker: &str, name: &str) -> Result<()> {
        let mut stocks: Vec<RecentStock> = self.load_list(RECENT_STOCKS_KEY).await;
        stocks.retain(|s| s.ticker != ticker);
        stocks.insert(
            0,
            RecentStock {
                ticker: ticker.to_string(),
                name: name.to_string(),
                last_viewed: Utc::now().timestamp_millis(),
            },
        );
        stocks.truncate(MAX_RECENT_STOCKS);
        self.save_list(RECENT_STOCKS_KEY, &stocks).await
    }

    /// Remove a stock from the recent list (no-op if absent) and persist
    pub async fn remove_stock(&self, ticker: &str) -> Result<()> {
        let mut stocks: Vec<RecentStock> = self.load_list(RECENT_STOCKS_KEY).await;
        stocks.retain(|s| s.ticker != ticker);
        self.save_list(RECENT_STOCKS_KEY, &stocks).await
    }

    /// The recent-stocks list, most-recent-first; empty when nothing is
    /// persisted or the blob is unreadable
    pub async fn recent_stocks(&self) -> Vec<RecentStock> {
        self.load_list(RECENT_STOCKS_KEY).await
    }

    /// Record a submitted search query: move-to-front, truncate, persist
    pub async fn record_search(&self, query: &str) -> Result<()> {
        let mut history: Vec<String> = self.load_list(SEARCH_HISTORY_KEY).await;
        history.retain(|q| q != query);
        history.insert(0, query.to_string());
        history.truncate(MAX_SEARCH_HISTORY);
        self.save_list(SEARCH_HISTORY_KEY, &history).await
    }

    /// The search-history list, most-recent-first; empty on absence/failure
    pub async fn search_history(&self) -> Vec<String> {
        self.load_list(SEARCH_HISTORY_KEY).await
    }

    /// Delete the persisted search history entirely
    pub async fn clear_search_history(&self) -> Result<()> {
        self.storage.remove(SEARCH_HISTORY_KEY).await
    }

    /// Load a persisted list, degrading to empty on absence, storage failure,
    /// or an unparsable blob
    async fn load_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let blob = match self.storage.get(key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read persisted list");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Persisted<T>>(&blob) {
            Ok(persisted) => persisted.items,
            // Pre-envelope blobs were bare arrays
            Err(_) => match serde_json::from_str::<Vec<T>>(&blob) {
                Ok(items) => items,
                Err(e) => {
                    tracing::warn!(key, error = %e, "failed to decode persisted list");
                    Vec::new()
                }
            },
        }
    }

    async fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let blob = serde_json::to_string(&Persisted {
            version: FORMAT_VERSION,
            items: items.iter().collect::<Vec<_>>(),
        })?;
        self.storage.set(key, &blob).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn store() -> (HistoryStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (HistoryStore::new(storage.clone()), storage)
    }

    #[tokio::test]
    async fn test_views_are_most_recent_first() {
        let (store, _) = store();
        store.record_stock_view("AAPL", "Apple Inc.").await.unwrap();
        store.record_stock_view("MSFT", "Microsoft").await.unwrap();
        store.record_stock_view("GOOG", "Alphabet").await.unwrap();

        let tickers: Vec<_> = store
            .recent_stocks()
            .await
            .into_iter()
            .map(|s| s.ticker)
            .collect();
        assert_eq!(tickers, ["GOOG", "MSFT", "AAPL"]);
    }

    #[tokio::test]
    async fn test_repeat_view_moves_to_front_without_duplicate() {
        let (store, _) = store();
        store.record_stock_view("AAPL", "Apple Inc.").await.unwrap();
        store.record_stock_view("MSFT", "Microsoft").await.unwrap();
        store.record_stock_view("AAPL", "Apple Inc.").await.unwrap();

        let stocks = store.recent_stocks().await;
        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[0].ticker, "AAPL");
        assert_eq!(stocks[1].ticker, "MSFT");
    }

    #[tokio::test]
    async fn test_recent_stocks_never_exceed_capacity() {
        let (store, _) = store();
        for i in 0..25 {
            store
                .record_stock_view(&format!("TICK{i}"), &format!("Company {i}"))
                .await
                .unwrap();
        }

        let stocks = store.recent_stocks().await;
        assert_eq!(stocks.len(), MAX_RECENT_STOCKS);
        assert_eq!(stocks[0].ticker, "TICK24");
        // The five oldest views fell off the end
        assert_eq!(stocks.last().unwrap().ticker, "TICK5");
    }

    #[tokio::test]
    async fn test_remove_stock() {
        let (store, _) = store();
        store.record_stock_view("AAPL", "Apple Inc.").await.unwrap();
        store.record_stock_view("MSFT", "Microsoft").await.unwrap();

        store.remove_stock("AAPL").await.unwrap();
        let stocks = store.recent_stocks().await;
        assert_eq!(stocks.len(), 1);
        assert!(stocks.iter().all(|s| s.ticker != "AAPL"));

        // Removing an absent ticker leaves the list unchanged
        store.remove_stock("TSLA").await.unwrap();
        assert_eq!(store.recent_stocks().await.len(), 1);
    }

    #[tokio::test]
    async fn test_search_history_dedup_and_capacity() {
        let (store, _) = store();
        for i in 0..12 {
            store.record_search(&format!("query {i}")).await.unwrap();
        }
        store.record_search("query 5").await.unwrap();

        let history = store.search_history().await;
        assert_eq!(history.len(), MAX_SEARCH_HISTORY);
        assert_eq!(history[0], "query 5");
        assert_eq!(history.iter().filter(|q| *q == "query 5").count(), 1);
    }

    #[tokio::test]
    async fn test_clear_search_history() {
        let (store, _) = store();
        store.record_search("apple").await.unwrap();
        store.record_search("tesla").await.unwrap();

        store.clear_search_history().await.unwrap();
        assert!(store.search_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_round_trip_through_fresh_store() {
        let storage = Arc::new(MemoryStorage::new());
        let store = HistoryStore::new(storage.clone());
        store.record_stock_view("AAPL", "Apple Inc.").await.unwrap();
        store.record_stock_view("MSFT", "Microsoft").await.unwrap();
        let before = store.recent_stocks().await;

        // A new store over the same storage sees the identical ordered list
        let reopened = HistoryStore::new(storage);
        assert_eq!(reopened.recent_stocks().await, before);
    }

    #[tokio::test]
    async fn test_loads_legacy_bare_array_blob() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(
                RECENT_STOCKS_KEY,
                r#"[{"ticker":"AAPL","name":"Apple Inc.","lastViewed":1700000000000}]"#,
            )
            .await
            .unwrap();

        let store = HistoryStore::new(storage.clone());
        let stocks = store.recent_stocks().await;
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].ticker, "AAPL");

        // The next mutation upgrades the blob to the versioned envelope
        store.record_stock_view("MSFT", "Microsoft").await.unwrap();
        let blob = storage.get(RECENT_STOCKS_KEY).await.unwrap().unwrap();
        assert!(blob.contains("\"version\":1"));
    }

    #[tokio::test]
    async fn test_corrupt_blob_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(SEARCH_HISTORY_KEY, "not json at all").await.unwrap();

        let store = HistoryStore::new(storage);
        assert!(store.search_history().await.is_empty());
    }
}
