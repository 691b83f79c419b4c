//! Port trait implementation for `SeedClient`.
//!
//! Implements the core-owned `SeedSourcePort` trait, converting internal
//! errors to `SeedSourceError` at the boundary.

use async_trait::async_trait;
use pokedex_core::Pokemon;
use pokedex_core::ports::{SeedSourceError, SeedSourcePort};

use crate::client::SeedClient;
use crate::error::SeedError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `SeedError` to core `SeedSourceError`.
fn map_error(err: SeedError) -> SeedSourceError {
    match err {
        SeedError::ApiRequestFailed { status, url } => SeedSourceError::Network {
            message: format!("request failed with status {status}: {url}"),
        },
        SeedError::Network(e) => SeedSourceError::Network {
            message: e.to_string(),
        },
        SeedError::InvalidResponse { message } => SeedSourceError::InvalidResponse { message },
        SeedError::JsonParse(e) => SeedSourceError::InvalidResponse {
            message: e.to_string(),
        },
        SeedError::InvalidUrl(e) => SeedSourceError::Configuration {
            message: e.to_string(),
        },
        SeedError::Configuration { message } => SeedSourceError::Configuration { message },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend> SeedSourcePort for SeedClient<B> {
    async fn fetch_all(&self) -> Result<Vec<Pokemon>, SeedSourceError> {
        self.fetch_records().await.map_err(map_error)
    }

    fn describe(&self) -> String {
        self.url().to_string()
    }
}
