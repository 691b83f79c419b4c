//! Main commands enum and their arguments.
//!
//! Every `serve`/`seed` option can also be set through a `POKEDEX_*`
//! environment variable (or a `.env` file).

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Seed the database and serve the HTTP API
    Serve(ServeArgs),

    /// Load the seed dataset into the database and exit
    Seed(SeedArgs),

    /// Show resolved data paths
    Paths,
}

/// Arguments for `pokedex serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "POKEDEX_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "POKEDEX_PORT", default_value = "8000")]
    pub port: u16,

    /// SQLite database file (defaults to the data directory)
    #[arg(long, env = "POKEDEX_DATABASE")]
    pub database: Option<PathBuf>,

    /// URL of the seed dataset
    #[arg(long, env = "POKEDEX_SEED_URL")]
    pub seed_url: Option<String>,

    /// Start without loading the seed dataset
    #[arg(long, env = "POKEDEX_SKIP_SEED")]
    pub skip_seed: bool,

    /// Allowed CORS origin (repeatable; all origins if omitted)
    #[arg(
        long = "allowed-origin",
        env = "POKEDEX_ALLOWED_ORIGINS",
        value_delimiter = ','
    )]
    pub allowed_origins: Vec<String>,
}

/// Arguments for `pokedex seed`.
#[derive(Args, Debug, Clone)]
pub struct SeedArgs {
    /// SQLite database file (defaults to the data directory)
    #[arg(long, env = "POKEDEX_DATABASE")]
    pub database: Option<PathBuf>,

    /// URL of the seed dataset
    #[arg(long, env = "POKEDEX_SEED_URL")]
    pub seed_url: Option<String>,
}
