//! Short-TTL quote cache
//!
//! The home screen re-fetches quotes for every listed ticker on each refresh;
//! caching them for a minute keeps a pull-to-refresh from hammering the
//! backend with identical calls.

use crate::models::StockData;
use cached::{Cached, TimedCache};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Cache of current quotes keyed by ticker
pub struct QuoteCache {
    cache: Arc<RwLock<TimedCache<String, StockData>>>,
}

impl QuoteCache {
    /// Create a new cache with the given TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a cached quote for a ticker
    pub async fn get(&self, ticker: &str) -> Option<StockData> {
        let mut cache = self.cache.write().await;
        cache.cache_get(ticker).cloned()
    }

    /// Insert a quote
    pub async fn insert(&self, ticker: impl Into<String>, stock: StockData) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(ticker.into(), stock);
    }

    /// Get a quote, calling the fetcher and caching its result on a miss
    pub async fn get_or_fetch<F, Fut, E>(&self, ticker: &str, fetcher: F) -> Result<StockData, E>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<StockData, E>>,
    {
        if let Some(stock) = self.get(ticker).await {
            tracing::debug!(ticker, "quote cache hit");
            return Ok(stock);
        }

        tracing::debug!(ticker, "quote cache miss");
        let stock = fetcher().await?;
        self.insert(ticker, stock.clone()).await;
        Ok(stock)
    }

    /// Drop a cached quote
    pub async fn invalidate(&self, ticker: &str) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_remove(ticker);
    }

    /// Drop all cached quotes
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Number of cached quotes
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    /// Whether the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for QuoteCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(ticker: &str, price: f64) -> StockData {
        StockData {
            ticker: ticker.to_string(),
            name: format!("{ticker} Inc."),
            current_price: price,
            change: 0.0,
            change_percent: 0.0,
            currency: "USD".to_string(),
            market_state: "open".to_string(),
            data: vec![],
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        cache.insert("AAPL", quote("AAPL", 178.5)).await;

        let cached = cache.get("AAPL").await.unwrap();
        assert_eq!(cached.current_price, 178.5);
        assert!(cache.get("MSFT").await.is_none());
    }

    #[tokio::test]
    async fn test_get_or_fetch_only_fetches_once() {
        let cache = QuoteCache::new(Duration::from_secs(60));

        let mut calls = 0;
        let stock = cache
            .get_or_fetch("AAPL", || {
                calls += 1;
                async { Ok::<_, String>(quote("AAPL", 178.5)) }
            })
            .await
            .unwrap();
        assert_eq!(stock.current_price, 178.5);
        assert_eq!(calls, 1);

        let stock = cache
            .get_or_fetch("AAPL", || {
                calls += 1;
                async { Ok::<_, String>(quote("AAPL", 999.0)) }
            })
            .await
            .unwrap();
        assert_eq!(stock.current_price, 178.5);
        assert_eq!(calls, 1);
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache = QuoteCache::new(Duration::from_secs(60));
        cache.insert("AAPL", quote("AAPL", 1.0)).await;
        cache.insert("MSFT", quote("MSFT", 2.0)).await;
        assert_eq!(cache.len().await, 2);

        cache.invalidate("AAPL").await;
        assert!(cache.get("AAPL").await.is_none());

        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
