//! HTTP client for the backend API
//!
//! All endpoints are request/response POSTs carrying JSON bodies. Data-style
//! calls and AI-inference calls run on separate clients because their fixed
//! budgets differ (30s vs 120s); a timeout is reported as its own error kind
//! so callers can tell "slow backend" from "backend down".

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{
    Envelope, ForecastData, ForecastMethod, LlmBacktest, LlmPrediction, NewsArticle, NewsResponse,
    Period, SearchResult, StockData,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use url::Url;

/// Client for the backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    data: reqwest::Client,
    inference: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client from a configuration
    pub fn new(config: ApiConfig) -> Result<Self> {
        config.validate()?;

        let data = reqwest::Client::builder()
            .timeout(config.data_timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        let inference = reqwest::Client::builder()
            .timeout(config.inference_timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            data,
            inference,
            config,
        })
    }

    /// Create a client configured from the environment
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the current quote and historical price series for a ticker
    pub async fn stock_data(&self, ticker: &str, period: Period) -> Result<StockData> {
        let ticker = ticker.to_uppercase();
        self.post_data(
            "/api/stock-data",
            json!({ "ticker": ticker, "period": period.as_str() }),
        )
        .await
    }

    /// Fetch news articles for a ticker
    pub async fn news(&self, ticker: &str, period: Period) -> Result<Vec<NewsArticle>> {
        let ticker = ticker.to_uppercase();
        let response: NewsResponse = self
            .post_data(
                "/api/news",
                json!({ "ticker": ticker, "period": period.as_str() }),
            )
            .await?;
        Ok(response.articles)
    }

    /// Request a forecast series computed server-side
    pub async fn forecast(
        &self,
        ticker: &str,
        method: ForecastMethod,
        period: Period,
    ) -> Result<ForecastData> {
        let ticker = ticker.to_uppercase();
        self.post_data(
            "/api/forecast",
            json!({
                "ticker": ticker,
                "method": method.as_str(),
                "period": period.as_str(),
            }),
        )
        .await
    }

    /// Search tickers by symbol or company name.
    ///
    /// Empty or whitespace-only queries are short-circuited client-side and
    /// never reach the server.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        self.post_data("/api/search", json!({ "query": query })).await
    }

    /// Run the AI prediction model for a ticker
    pub async fn llm_predict(&self, ticker: &str) -> Result<LlmPrediction> {
        let ticker = ticker.to_uppercase();
        let envelope: Envelope<LlmPrediction> = self
            .post_inference("/api/llm/predict", json!({ "ticker": ticker }))
            .await?;
        envelope.into_data("prediction")
    }

    /// Run the AI backtest for a ticker
    pub async fn llm_backtest(&self, ticker: &str) -> Result<LlmBacktest> {
        let ticker = ticker.to_uppercase();
        let envelope: Envelope<LlmBacktest> = self
            .post_inference("/api/llm/backtest", json!({ "ticker": ticker }))
            .await?;
        envelope.into_data("backtest")
    }

    async fn post_data<T: DeserializeOwned>(&self, path: &str, body: serde_json::Value) -> Result<T> {
        self.post_json(&self.data, path, body, self.config.data_timeout)
            .await
    }

    async fn post_inference<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T> {
        self.post_json(&self.inference, path, body, self.config.inference_timeout)
            .await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        client: &reqwest::Client,
        path: &str,
        body: serde_json::Value,
        budget: Duration,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "POST");

        let response = client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport_error(&e, budget))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
                .unwrap_or_else(|| "Unknown error".to_string());

            return Err(ApiError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| classify_transport_error(&e, budget))?;

        Ok(serde_json::from_str(&text)?)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid endpoint path {path:?}: {e}")))
    }
}

/// A blown budget is a Timeout; anything else without a response is
/// Unreachable.
fn classify_transport_error(err: &reqwest::Error, budget: Duration) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout {
            budget_secs: budget.as_secs(),
        }
    } else {
        tracing::debug!(error = %err, "transport error");
        ApiError::Unreachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::default()).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client();
        assert_eq!(client.config().data_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_endpoint_join() {
        let client = client();
        let url = client.endpoint("/api/stock-data").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/stock-data");
    }

    #[tokio::test]
    async fn test_search_short_circuits_empty_query() {
        let client = client();
        let err = client.search("   ").await.unwrap_err();
        assert!(matches!(err, ApiError::EmptyQuery));
    }

    #[tokio::test]
    #[ignore] // Requires a running backend
    async fn test_stock_data_live() {
        let client = ApiClient::from_env().unwrap();
        let stock = client.stock_data("AAPL", Period::OneYear).await.unwrap();
        assert_eq!(stock.ticker, "AAPL");
        assert!(!stock.data.is_empty());
    }

    #[tokio::test]
    #[ignore] // Requires a running backend
    async fn test_search_live() {
        let client = ApiClient::from_env().unwrap();
        let results = client.search("apple").await.unwrap();
        assert!(results.iter().any(|r| r.ticker == "AAPL"));
    }
}
