//! Error types for backend API operations

use thiserror::Error;

/// Errors surfaced by the backend API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received from the backend
    #[error("no response from server - please check if the backend is running")]
    Unreachable,

    /// Backend answered with a non-2xx status
    #[error("server error: {status} - {detail}")]
    Server { status: u16, detail: String },

    /// Call exceeded its fixed time budget
    #[error("request timed out after {budget_secs}s - please try again")]
    Timeout { budget_secs: u64 },

    /// Response body could not be decoded
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Empty search query, short-circuited before reaching the server
    #[error("search query is empty")]
    EmptyQuery,

    /// Backend envelope reported `success: false`
    #[error("{0}")]
    Rejected(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether re-running the same call can reasonably be expected to help.
    ///
    /// Only timeouts qualify; the client never retries automatically, the
    /// caller decides whether to re-trigger the action.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::Timeout { .. })
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
