//! CLI bootstrap: logging and the base server configuration shared by handlers.

use std::path::PathBuf;

use anyhow::Result;
use pokedex_axum::ServerConfig;
use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed (tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Server configuration for the given database file, or for the default
/// database location when none is given.
pub fn base_config(database: Option<PathBuf>) -> Result<ServerConfig> {
    match database {
        Some(path) => Ok(ServerConfig::new(path)),
        None => ServerConfig::with_defaults(),
    }
}
