//! Serve command handler.

use anyhow::Result;
use pokedex_axum::{ServerConfig, start_server};

use crate::bootstrap::base_config;
use crate::commands::ServeArgs;

/// Translate `serve` arguments into a server configuration.
pub fn server_config(args: ServeArgs) -> Result<ServerConfig> {
    let mut config = base_config(args.database)?.with_address(args.host, args.port);

    if let Some(url) = args.seed_url {
        config = config.with_seed_url(url);
    }
    if args.skip_seed {
        config = config.without_seed();
    }
    if !args.allowed_origins.is_empty() {
        config = config.with_allowed_origins(args.allowed_origins);
    }
    Ok(config)
}

/// Seed the database, then serve until interrupted.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = server_config(args)?;
    tracing::info!(
        target: "pokedex.cli",
        host = %config.host,
        port = config.port,
        skip_seed = config.skip_seed,
        "Running serve command"
    );
    start_server(config).await
}
