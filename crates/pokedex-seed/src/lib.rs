//! HTTP client for the remote Pokémon seed dataset.
//!
//! Fetches the raw JSON array, parses it leniently into domain entities
//! and exposes the result through the `SeedSourcePort` trait from
//! `pokedex-core`.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultSeedClient is meant to be used through the SeedSourcePort trait,
// not its internal generic structure
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod port;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultSeedClient;

// Configuration
pub use config::{DEFAULT_SEED_URL, SeedClientConfig};

// Errors
pub use error::{SeedError, SeedResult};
