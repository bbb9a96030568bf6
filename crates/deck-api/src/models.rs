//! Wire types for the backend API
//!
//! Field names follow the backend's JSON exactly, which mixes camelCase
//! (`currentPrice`, `publishedAt`) with snake_case (`relevance_score`,
//! `technical_indicators`); renames are applied per field where the two
//! conventions collide.

use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

/// One daily bar of a price series, chronological order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Current quote plus historical price series for a ticker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockData {
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub currency: String,
    pub market_state: String,
    #[serde(default)]
    pub data: Vec<PriceBar>,
}

/// A news article with optional server-side sentiment scoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub description: String,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub source: String,
    pub url: String,
    #[serde(default)]
    pub sentiment: Option<f64>,
    #[serde(default)]
    pub relevance_score: Option<f64>,
    #[serde(default)]
    pub article_type: Option<String>,
}

/// Response shape of /api/news
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct NewsResponse {
    #[serde(default)]
    pub articles: Vec<NewsArticle>,
}

/// One predicted point of a forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: String,
    pub price: f64,
}

/// Predicted series plus model quality estimates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastData {
    pub method: String,
    #[serde(default)]
    pub predictions: Vec<ForecastPoint>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One match from /api/search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub ticker: String,
    pub name: String,
    pub exchange: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Predicted direction of the next move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Neutral,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Neutral => write!(f, "neutral"),
        }
    }
}

/// Technical indicator snapshot attached to an AI prediction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    #[serde(default)]
    pub rsi: Option<f64>,
    #[serde(default)]
    pub macd: Option<f64>,
    #[serde(default)]
    pub sma_20: Option<f64>,
    #[serde(default)]
    pub ema_12: Option<f64>,
    #[serde(default)]
    pub bollinger_upper: Option<f64>,
    #[serde(default)]
    pub bollinger_lower: Option<f64>,
    #[serde(default)]
    pub volume_trend: Option<f64>,
    #[serde(default)]
    pub momentum: Option<f64>,
}

impl TechnicalIndicators {
    /// Label/value pairs in display order, for rendering
    pub fn entries(&self) -> Vec<(&'static str, Option<f64>)> {
        vec![
            ("RSI", self.rsi),
            ("MACD", self.macd),
            ("SMA 20", self.sma_20),
            ("EMA 12", self.ema_12),
            ("BOLLINGER UPPER", self.bollinger_upper),
            ("BOLLINGER LOWER", self.bollinger_lower),
            ("VOLUME TREND", self.volume_trend),
            ("MOMENTUM", self.momentum),
        ]
    }
}

/// Narrative sections of an AI prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub trend_analysis: String,
    pub momentum_analysis: String,
    pub volume_analysis: String,
    pub news_analysis: String,
    pub market_context: String,
}

/// Payload of /api/llm/predict
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmPrediction {
    pub ticker: String,
    pub prediction: Direction,
    pub confidence: f64,
    #[serde(rename = "currentPrice")]
    pub current_price: f64,
    pub currency: String,
    pub technical_indicators: TechnicalIndicators,
    pub analysis_summary: AnalysisSummary,
}

/// Per-class scores keyed by direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassScores {
    pub up: f64,
    pub down: f64,
    pub neutral: f64,
}

/// Per-class prediction counts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassCounts {
    pub up: u32,
    pub down: u32,
    pub neutral: u32,
}

/// Date range a backtest was evaluated over
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestRange {
    pub start: String,
    pub end: String,
}

/// Payload of /api/llm/backtest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmBacktest {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub total_predictions: u32,
    pub correct_predictions: u32,
    pub confusion_matrix: Vec<Vec<u32>>,
    pub class_labels: Vec<String>,
    pub precision_by_class: ClassScores,
    pub recall_by_class: ClassScores,
    #[serde(default)]
    pub optimization_tips: Vec<String>,
    pub ticker: String,
    pub period: String,
    pub backtest_date_range: BacktestRange,
    pub prediction_distribution: ClassCounts,
    pub average_confidence: f64,
}

/// Response envelope of the /api/llm/* endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap the payload, turning `success: false` into [`ApiError::Rejected`]
    pub(crate) fn into_data(self, operation: &str) -> Result<T> {
        if self.success {
            self.data.ok_or_else(|| {
                ApiError::Rejected(format!("{operation} succeeded but returned no data"))
            })
        } else {
            Err(ApiError::Rejected(
                self.message
                    .unwrap_or_else(|| format!("{operation} failed")),
            ))
        }
    }
}

/// Requested historical time span for price/news/forecast queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    OneMonth,
    ThreeMonths,
    #[default]
    OneYear,
}

impl Period {
    /// Wire spelling used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::OneMonth => "1m",
            Period::ThreeMonths => "3m",
            Period::OneYear => "1y",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Period {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "1m" => Ok(Period::OneMonth),
            "3m" => Ok(Period::ThreeMonths),
            "1y" => Ok(Period::OneYear),
            other => Err(ApiError::Config(format!("unknown period: {other}"))),
        }
    }
}

/// Server-side forecasting method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastMethod {
    #[default]
    Linear,
    Polynomial,
    Arima,
}

impl ForecastMethod {
    /// Wire spelling used in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::Linear => "linear",
            ForecastMethod::Polynomial => "polynomial",
            ForecastMethod::Arima => "arima",
        }
    }
}

impl std::fmt::Display for ForecastMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ForecastMethod {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(ForecastMethod::Linear),
            "polynomial" | "poly" => Ok(ForecastMethod::Polynomial),
            "arima" => Ok(ForecastMethod::Arima),
            other => Err(ApiError::Config(format!("unknown forecast method: {other}"))),
        }
    }
}
