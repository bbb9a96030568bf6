//! Error types for chart assembly

use thiserror::Error;

/// Errors surfaced by chart assembly
#[derive(Debug, Error)]
pub enum ChartError {
    /// Date-range selector value not in the closed set
    #[error("unknown date range: {0} (expected one of 1W, 1M, 3M, 6M, 1Y, 5Y, 10Y, MAX)")]
    UnknownRange(String),
}

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
