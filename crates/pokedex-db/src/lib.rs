//! `SQLite` persistence for pokedex.
//!
//! Implements the `PokemonRepository` port from `pokedex-core` on top of
//! `sqlx`, and provides the schema setup and composition helpers used by
//! the binaries.
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqlitePokemonRepository;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
