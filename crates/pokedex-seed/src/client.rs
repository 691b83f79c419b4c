//! Seed client for fetching the remote dataset.

use pokedex_core::Pokemon;
use url::Url;

use crate::config::SeedClientConfig;
use crate::error::{SeedError, SeedResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::RawPokemon;
use crate::parsing::to_domain;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default seed client using the reqwest HTTP backend.
pub type DefaultSeedClient = SeedClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the seed dataset.
///
/// Generic over an HTTP backend so tests can substitute a fake. External
/// code should use `DefaultSeedClient::new()`.
pub struct SeedClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) url: Url,
}

impl DefaultSeedClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the configured URL is not an absolute `http`/`https` URL or
    /// the HTTP client cannot be built.
    pub fn new(config: &SeedClientConfig) -> SeedResult<Self> {
        let url = parse_dataset_url(&config.url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, url })
    }
}

impl<B: HttpBackend> SeedClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(url: Url, backend: B) -> Self {
        Self { backend, url }
    }

    /// The dataset URL this client reads from.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Download the dataset and convert every record to a domain entity.
    ///
    /// A record that cannot be decoded fails the whole fetch.
    pub async fn fetch_records(&self) -> SeedResult<Vec<Pokemon>> {
        let raw: Vec<RawPokemon> = self.backend.get_json(&self.url).await?;
        tracing::debug!(target: "pokedex.seed", count = raw.len(), url = %self.url, "Fetched seed records");
        Ok(raw.into_iter().map(to_domain).collect())
    }
}

fn parse_dataset_url(raw: &str) -> SeedResult<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SeedError::Configuration {
            message: format!("unsupported URL scheme '{other}' for {raw}"),
        }),
    }
}
