//! Error types for match_history

use thiserror::Error;

/// Unified error type for API, cache and configuration operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credential file missing, unreadable or empty
    #[error("Configuration error: {0}")]
    Config(String),
    /// 429 received and the retry policy gave up (or was told not to wait)
    #[error("Rate limit exceeded running {endpoint}... try later")]
    RateLimitExceeded { endpoint: String },
    /// Any other non-success status from the remote API
    #[error("HTTP error {status} on {endpoint}")]
    RemoteApi {
        status: reqwest::StatusCode,
        endpoint: String,
    },
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response or cached record
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
