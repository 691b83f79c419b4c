//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use pokedex_core::paths::database_path;
use pokedex_core::services::AppCore;
use pokedex_db::{CoreFactory, setup_database};
use pokedex_seed::{DefaultSeedClient, SeedClientConfig};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// Seed dataset client settings.
    pub seed: SeedClientConfig,
    /// Start without loading the seed dataset.
    pub skip_seed: bool,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Default bind address.
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    /// Default port.
    pub const DEFAULT_PORT: u16 = 8000;

    /// Create config for the given database file, everything else default.
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            host: Self::DEFAULT_HOST.to_string(),
            port: Self::DEFAULT_PORT,
            database_path: database_path.into(),
            seed: SeedClientConfig::default(),
            skip_seed: false,
            cors: CorsConfig::default(),
        }
    }

    /// Create config with the default database path.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(database_path()?))
    }

    /// Set the bind address.
    #[must_use]
    pub fn with_address(mut self, host: impl Into<String>, port: u16) -> Self {
        self.host = host.into();
        self.port = port;
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Read the seed dataset from another URL.
    #[must_use]
    pub fn with_seed_url(mut self, url: impl Into<String>) -> Self {
        self.seed = self.seed.with_url(url);
        self
    }

    /// Replace the seed client settings.
    #[must_use]
    pub fn with_seed_config(mut self, seed: SeedClientConfig) -> Self {
        self.seed = seed;
        self
    }

    /// Start without seeding.
    #[must_use]
    pub const fn without_seed(mut self) -> Self {
        self.skip_seed = true;
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    pub const fn new(core: Arc<AppCore>) -> Self {
        Self { core }
    }
}

/// Build the `AppCore` for a configuration: open the database and wire the
/// seed client. Does not seed.
pub async fn build_core(config: &ServerConfig) -> Result<AppCore> {
    let pool = setup_database(&config.database_path)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_path.display()))?;
    let seed_client = DefaultSeedClient::new(&config.seed)?;
    Ok(CoreFactory::build_app_core(pool, Arc::new(seed_client)))
}

/// Bootstrap the Axum server with all services.
///
/// Seeding completes before this returns; a seed failure is fatal unless
/// `skip_seed` is set.
pub async fn bootstrap(config: ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "pokedex.paths",
        database_path = %config.database_path.display(),
        seed_url = config.seed.url(),
        skip_seed = config.skip_seed,
        "Axum bootstrap resolved paths"
    );

    let core = build_core(&config).await?;

    if config.skip_seed {
        tracing::warn!(target: "pokedex.seed", "Seeding skipped by configuration");
    } else {
        core.seeder()
            .load_seed_data()
            .await
            .context("Failed to load seed data (use --skip-seed to start without it)")?;
    }

    Ok(AxumContext::new(Arc::new(core)))
}

/// Start the web server on the configured address.
///
/// Runs until Ctrl-C.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let addr = format!("{}:{}", config.host, config.port);
    let cors = config.cors.clone();
    let ctx = bootstrap(config).await?;

    let app = crate::routes::create_router(ctx, &cors);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(target: "pokedex.http", "pokedex API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "pokedex.http", error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!(target: "pokedex.http", "Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let config = ServerConfig::new("/tmp/dex.db")
            .with_address("127.0.0.1", 9000)
            .with_seed_url("http://localhost/dex.json")
            .with_allowed_origins(vec!["http://localhost:3000".to_string()])
            .without_seed();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.seed.url(), "http://localhost/dex.json");
        assert!(config.skip_seed);
        assert!(matches!(config.cors, CorsConfig::AllowOrigins(ref o) if o.len() == 1));
    }

    #[tokio::test]
    async fn test_bootstrap_without_seed_opens_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::new(dir.path().join("pokedex.db")).without_seed();

        let ctx = bootstrap(config).await.unwrap();

        assert!(ctx.core.pokemon().list().await.unwrap().is_empty());
        assert!(dir.path().join("pokedex.db").exists());
    }

    #[tokio::test]
    async fn test_seed_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServerConfig::new(dir.path().join("pokedex.db")).with_seed_config(
            SeedClientConfig::new()
                .with_url("http://127.0.0.1:9/pokedex.json")
                .with_max_retries(0),
        );

        assert!(bootstrap(config).await.is_err());
    }
}
