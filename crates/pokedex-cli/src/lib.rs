//! Command-line front end for pokedex.
//!
//! `pokedex serve` runs the HTTP API, `pokedex seed` loads the dataset
//! into a database without serving, and `pokedex paths` prints where data
//! lives.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::init_tracing;
pub use commands::{Commands, SeedArgs, ServeArgs};
pub use parser::Cli;
