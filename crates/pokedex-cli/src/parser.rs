//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Pokémon lookup service.
///
/// Top-level parser that handles global options and dispatches to
/// subcommands.
#[derive(Parser)]
#[command(name = "pokedex")]
#[command(about = "Serve and manage the Pokémon lookup API")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
