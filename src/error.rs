//! Load error types
//!
//! Everything that can go wrong between issuing a GET and holding a decoded
//! payload.

use thiserror::Error;

/// Errors that can occur while loading dashboard data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    /// The request never produced a response (connection refused, DNS, CORS)
    #[error("Network error: {0}")]
    Network(String),

    /// The request timed out
    #[error("Request timeout")]
    Timeout,

    /// The backend answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON we expected
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LoadError {
    /// The backend could not be reached, so no response arrived at all
    pub fn is_network(&self) -> bool {
        matches!(self, LoadError::Network(_) | LoadError::Timeout)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

/// Result type alias for load operations
pub type LoadResult<T> = Result<T, LoadError>;
