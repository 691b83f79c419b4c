//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Traits are minimal and CRUD-focused for repositories
//! - The seed source hands back domain entities, not raw JSON

pub mod pokemon_repository;
pub mod seed_source;

use std::sync::Arc;
use thiserror::Error;

pub use pokemon_repository::PokemonRepository;
pub use seed_source::{SeedSourceError, SeedSourcePort};

use crate::domain::ValidationError;

/// Container for all repository trait objects.
///
/// Lets adapters wire repositories without coupling to concrete
/// implementations. Lives in core so that `AppCore` can accept it without
/// depending on `pokedex-db`.
#[derive(Clone)]
pub struct Repos {
    /// Pokémon repository for CRUD operations.
    pub pokemon: Arc<dyn PokemonRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(pokemon: Arc<dyn PokemonRepository>) -> Self {
        Self { pokemon }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An entity with the same identifier already exists.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., foreign key, check constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepositoryError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Seed source could not be fetched or parsed.
    #[error(transparent)]
    Seed(#[from] SeedSourceError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Internal error (unexpected condition).
    #[error("Internal error: {0}")]
    Internal(String),
}
