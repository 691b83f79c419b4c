//! Pokémon repository trait definition.
//!
//! This port defines the interface for entity persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Pokemon, PokemonUpdate};

/// Repository for Pokémon persistence operations.
///
/// Every operation that writes more than one row (the entity plus its
/// children) must be atomic: either all rows are written or none are.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Children are always loaded and returned with their owner
/// - Identifiers are caller-assigned; the store never generates them
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// List every stored Pokémon ordered by id.
    async fn list(&self) -> Result<Vec<Pokemon>, RepositoryError>;

    /// Number of stored Pokémon.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Whether a Pokémon with this id is stored.
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Get a Pokémon by id.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if it doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Pokemon, RepositoryError>;

    /// Find the first Pokémon (lowest id) whose name matches case-insensitively.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if nothing matches.
    async fn find_by_name(&self, name: &str) -> Result<Pokemon, RepositoryError>;

    /// Insert a Pokémon and all of its children in one transaction.
    ///
    /// Returns the stored entity as read back from the store.
    /// Returns `Err(RepositoryError::AlreadyExists)` if the id is taken.
    async fn insert(&self, pokemon: &Pokemon) -> Result<Pokemon, RepositoryError>;

    /// Apply a partial update in one transaction.
    ///
    /// Returns the entity after the update.
    /// Returns `Err(RepositoryError::NotFound)` if the id doesn't exist.
    async fn update(&self, id: i64, update: &PokemonUpdate) -> Result<Pokemon, RepositoryError>;

    /// Delete a Pokémon; children are removed by cascade.
    ///
    /// Returns the last stored state of the deleted entity.
    /// Returns `Err(RepositoryError::NotFound)` if the id doesn't exist.
    async fn delete(&self, id: i64) -> Result<Pokemon, RepositoryError>;
}
