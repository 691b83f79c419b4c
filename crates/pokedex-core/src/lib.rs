//! Core domain types, ports and services for the pokedex service.
//!
//! This crate has no infrastructure dependencies: storage lives in
//! `pokedex-db`, the seed HTTP client in `pokedex-seed`, and the web
//! adapter in `pokedex-axum`.
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    Ability, Pokemon, PokemonType, PokemonUpdate, Stat, ValidationError, validate_pokemon,
    validate_update,
};
pub use paths::{PathError, data_root, database_path};
pub use ports::{
    CoreError, PokemonRepository, Repos, RepositoryError, SeedSourceError, SeedSourcePort,
};
pub use services::{AppCore, PokemonService, SeedLoader, SeedReport};
