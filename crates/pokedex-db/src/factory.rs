//! Composition utilities for building `AppCore` with `SQLite` backends.
//!
//! This module provides factory functions for wiring up the application
//! with `SQLite` repositories. It is focused purely on construction and
//! should not contain any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use pokedex_core::Repos;
use pokedex_core::ports::SeedSourcePort;
use pokedex_core::services::AppCore;

use crate::repositories::SqlitePokemonRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct CoreFactory;

impl CoreFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns a `Repos` struct from `pokedex-core` containing
    /// trait-object-wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Self::pokemon_repository(pool))
    }

    /// Build a complete `AppCore` instance from a pool and seed source.
    ///
    /// Equivalent to:
    ///
    /// ```ignore
    /// let repos = CoreFactory::build_repos(pool);
    /// let core = AppCore::new(repos, seed_source);
    /// ```
    pub fn build_app_core(pool: SqlitePool, seed_source: Arc<dyn SeedSourcePort>) -> AppCore {
        AppCore::new(Self::build_repos(pool), seed_source)
    }

    /// Create a Pokémon repository from a pool.
    pub fn pokemon_repository(pool: SqlitePool) -> Arc<SqlitePokemonRepository> {
        Arc::new(SqlitePokemonRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema
/// already applied.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Build repositories backed by this database.
    pub fn repos(&self) -> Repos {
        CoreFactory::build_repos(self.pool.clone())
    }

    /// Build an `AppCore` backed by this database.
    pub fn app_core(&self, seed_source: Arc<dyn SeedSourcePort>) -> AppCore {
        CoreFactory::build_app_core(self.pool.clone(), seed_source)
    }
}
