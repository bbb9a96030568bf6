//! Typed client for the Stock Analysis backend API
//!
//! Thin async wrappers over the backend's six POST endpoints:
//!
//! - `/api/stock-data` - current quote plus historical price series
//! - `/api/news` - articles with optional sentiment scoring
//! - `/api/forecast` - server-side forecast series
//! - `/api/search` - ticker/company search
//! - `/api/llm/predict` - AI direction prediction
//! - `/api/llm/backtest` - retrospective model evaluation
//!
//! All analysis happens server-side; this crate owns the wire types, the two
//! fixed call budgets (30s data / 120s inference), error classification, and
//! a short-TTL quote cache.
//!
//! # Example
//!
//! ```rust,ignore
//! use deck_api::{ApiClient, ApiConfig, Period};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ApiClient::new(ApiConfig::from_env()?)?;
//!     let stock = client.stock_data("AAPL", Period::OneYear).await?;
//!     println!("{} {}", stock.ticker, stock.current_price);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export main types for convenience
pub use cache::QuoteCache;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use models::{
    AnalysisSummary, BacktestRange, ClassCounts, ClassScores, Direction, ForecastData,
    ForecastMethod, ForecastPoint, LlmBacktest, LlmPrediction, NewsArticle, Period, PriceBar,
    SearchResult, StockData, TechnicalIndicators,
};
