//! Error types for seed client operations.
//!
//! Mapped to `SeedSourceError` at the port boundary.

use thiserror::Error;

/// Result type alias for seed client operations.
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors raised while fetching or decoding the seed dataset.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Request failed with an HTTP error status.
    #[error("Seed request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The dataset was reachable but its content is unusable.
    #[error("Invalid seed data: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The client configuration is unusable.
    #[error("Invalid seed client configuration: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
