//! Configuration for the backend API client

use crate::error::{ApiError, Result};
use std::time::Duration;
use url::Url;

/// Default backend base URL for local development
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Configuration for the backend API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend (scheme + host + port)
    pub base_url: Url,

    /// Fixed budget for data-style calls (stock data, news, forecast, search)
    pub data_timeout: Duration,

    /// Fixed budget for AI-inference calls (predict, backtest)
    pub inference_timeout: Duration,

    /// TTL for the client-side quote cache
    pub quote_cache_ttl: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_BASE_URL is a valid literal
            #[allow(clippy::unwrap_used)]
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            data_timeout: Duration::from_secs(30),
            inference_timeout: Duration::from_secs(120),
            quote_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl ApiConfig {
    /// Create a new configuration builder
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Load the base URL from the STOCKDECK_API_URL environment variable,
    /// falling back to the default when unset
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Ok(raw) = std::env::var("STOCKDECK_API_URL") {
            builder = builder.base_url(&raw)?;
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported base URL scheme: {}",
                self.base_url.scheme()
            )));
        }

        if self.data_timeout.is_zero() || self.inference_timeout.is_zero() {
            return Err(ApiError::Config(
                "call budgets must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for ApiConfig
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<Url>,
    data_timeout: Option<Duration>,
    inference_timeout: Option<Duration>,
    quote_cache_ttl: Option<Duration>,
}

impl ApiConfigBuilder {
    /// Set the backend base URL
    pub fn base_url(mut self, raw: &str) -> Result<Self> {
        let url = Url::parse(raw)
            .map_err(|e| ApiError::Config(format!("invalid base URL {raw:?}: {e}")))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Set the budget for data-style calls
    pub fn data_timeout(mut self, duration: Duration) -> Self {
        self.data_timeout = Some(duration);
        self
    }

    /// Set the budget for AI-inference calls
    pub fn inference_timeout(mut self, duration: Duration) -> Self {
        self.inference_timeout = Some(duration);
        self
    }

    /// Set the quote cache TTL
    pub fn quote_cache_ttl(mut self, duration: Duration) -> Self {
        self.quote_cache_ttl = Some(duration);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ApiConfig> {
        let defaults = ApiConfig::default();

        let config = ApiConfig {
            base_url: self.base_url.unwrap_or(defaults.base_url),
            data_timeout: self.data_timeout.unwrap_or(defaults.data_timeout),
            inference_timeout: self.inference_timeout.unwrap_or(defaults.inference_timeout),
            quote_cache_ttl: self.quote_cache_ttl.unwrap_or(defaults.quote_cache_ttl),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.data_timeout, Duration::from_secs(30));
        assert_eq!(config.inference_timeout, Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = ApiConfig::builder()
            .base_url("https://stocks.example.com:8443")
            .unwrap()
            .data_timeout(Duration::from_secs(10))
            .build()
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://stocks.example.com:8443/");
        assert_eq!(config.data_timeout, Duration::from_secs(10));
        assert_eq!(config.inference_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ApiConfig::builder().base_url("not a url").is_err());
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let config = ApiConfig::builder()
            .base_url("ftp://stocks.example.com")
            .unwrap()
            .build();
        assert!(config.is_err());
    }

    #[test]
    fn test_rejects_zero_budget() {
        let config = ApiConfig::builder()
            .data_timeout(Duration::ZERO)
            .build();
        assert!(config.is_err());
    }
}
