//! Seed source port.
//!
//! Abstracts the external dataset used to populate an empty store. The
//! implementation owns transport and wire-format details and hands back
//! already-parsed domain entities.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Pokemon;

/// Errors from seed source operations.
///
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum SeedSourceError {
    /// Network or connectivity error, including non-success HTTP status.
    #[error("Seed source unreachable: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The payload could not be parsed into entities.
    #[error("Invalid seed data: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// The source is misconfigured (e.g., malformed URL).
    #[error("Seed source configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// A source of seed records.
#[async_trait]
pub trait SeedSourcePort: Send + Sync {
    /// Fetch every record in the dataset.
    ///
    /// Any transport or parse failure fails the whole fetch.
    async fn fetch_all(&self) -> Result<Vec<Pokemon>, SeedSourceError>;

    /// Human-readable description of where records come from (for logs).
    fn describe(&self) -> String;
}
