//! Pokémon service - orchestrates entity CRUD operations.

use crate::domain::{Pokemon, PokemonUpdate, validate_pokemon, validate_update};
use crate::ports::{CoreError, PokemonRepository, RepositoryError};
use std::sync::Arc;

/// Service for Pokémon operations.
///
/// Validates input, enforces the caller-assigned identifier rule and
/// delegates persistence to the injected `PokemonRepository`.
pub struct PokemonService {
    repo: Arc<dyn PokemonRepository>,
}

impl PokemonService {
    /// Create a new service with the given repository.
    pub fn new(repo: Arc<dyn PokemonRepository>) -> Self {
        Self { repo }
    }

    /// List all Pokémon. An empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<Pokemon>, CoreError> {
        let all = self.repo.list().await?;
        tracing::debug!(target: "pokedex.pokemon", count = all.len(), "Listed Pokémon");
        Ok(all)
    }

    /// Get a Pokémon by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Pokemon, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(pokemon) => {
                tracing::info!(target: "pokedex.pokemon", id, "Retrieved Pokémon");
                Ok(pokemon)
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::warn!(target: "pokedex.pokemon", id, "Pokémon not found");
                }
                Err(e.into())
            }
        }
    }

    /// Get the first Pokémon whose name matches case-insensitively.
    pub async fn get_by_name(&self, name: &str) -> Result<Pokemon, CoreError> {
        match self.repo.find_by_name(name).await {
            Ok(pokemon) => {
                tracing::info!(target: "pokedex.pokemon", name, id = pokemon.id, "Retrieved Pokémon by name");
                Ok(pokemon)
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::warn!(target: "pokedex.pokemon", name, "Pokémon not found by name");
                }
                Err(e.into())
            }
        }
    }

    /// Create a Pokémon with its full child set.
    ///
    /// Fails with `AlreadyExists` if the id is taken; the existing row is
    /// left untouched.
    pub async fn create(&self, pokemon: Pokemon) -> Result<Pokemon, CoreError> {
        validate_pokemon(&pokemon)?;

        if self.repo.exists(pokemon.id).await? {
            tracing::warn!(target: "pokedex.pokemon", id = pokemon.id, "Attempt to create Pokémon with existing ID");
            return Err(RepositoryError::AlreadyExists(format!(
                "Pokémon with ID {} already exists",
                pokemon.id
            ))
            .into());
        }

        let created = self.repo.insert(&pokemon).await?;
        tracing::info!(target: "pokedex.pokemon", id = created.id, name = %created.name, "Created Pokémon");
        Ok(created)
    }

    /// Apply a partial update to an existing Pokémon.
    pub async fn update(&self, id: i64, update: PokemonUpdate) -> Result<Pokemon, CoreError> {
        validate_update(&update)?;

        match self.repo.update(id, &update).await {
            Ok(updated) => {
                tracing::info!(
                    target: "pokedex.pokemon",
                    id,
                    replaced_children = update.replaces_children(),
                    "Updated Pokémon"
                );
                Ok(updated)
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::warn!(target: "pokedex.pokemon", id, "Attempt to update non-existing Pokémon");
                }
                Err(e.into())
            }
        }
    }

    /// Delete a Pokémon and its children. Returns the deleted state.
    pub async fn delete(&self, id: i64) -> Result<Pokemon, CoreError> {
        match self.repo.delete(id).await {
            Ok(deleted) => {
                tracing::info!(target: "pokedex.pokemon", id, "Deleted Pokémon");
                Ok(deleted)
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::warn!(target: "pokedex.pokemon", id, "Attempt to delete non-existing Pokémon");
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Ability, PokemonType, ValidationError};
    use async_trait::async_trait;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Repo {}

        #[async_trait]
        impl PokemonRepository for Repo {
            async fn list(&self) -> Result<Vec<Pokemon>, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Pokemon, RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Pokemon, RepositoryError>;
            async fn insert(&self, pokemon: &Pokemon) -> Result<Pokemon, RepositoryError>;
            async fn update(&self, id: i64, update: &PokemonUpdate) -> Result<Pokemon, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<Pokemon, RepositoryError>;
        }
    }

    fn bulbasaur() -> Pokemon {
        Pokemon::new(1, "Bulbasaur")
            .with_measurements(7, 69, 64)
            .with_abilities(vec![Ability::new("Overgrow", false)])
            .with_types(vec![PokemonType::new("Grass")])
    }

    #[tokio::test]
    async fn test_create_rejects_existing_id_without_inserting() {
        let mut repo = MockRepo::new();
        repo.expect_exists().with(eq(1)).returning(|_| Ok(true));
        repo.expect_insert().never();

        let service = PokemonService::new(Arc::new(repo));
        let result = service.create(bulbasaur()).await;

        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn test_create_inserts_fresh_id() {
        let mut repo = MockRepo::new();
        repo.expect_exists().with(eq(1)).returning(|_| Ok(false));
        repo.expect_insert()
            .withf(|p| p.id == 1 && p.abilities.len() == 1)
            .times(1)
            .returning(|p| Ok(p.clone()));

        let service = PokemonService::new(Arc::new(repo));
        let created = service.create(bulbasaur()).await.unwrap();

        assert_eq!(created, bulbasaur());
    }

    #[tokio::test]
    async fn test_create_validates_before_touching_store() {
        let mut repo = MockRepo::new();
        repo.expect_exists().never();
        repo.expect_insert().never();

        let service = PokemonService::new(Arc::new(repo));
        let result = service.create(Pokemon::new(-3, "Bad")).await;

        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::InvalidId(-3)))
        ));
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Err(RepositoryError::NotFound(format!("Pokémon with ID {id}"))));

        let service = PokemonService::new(Arc::new(repo));
        let result = service.get_by_id(999).await;

        assert!(matches!(
            result,
            Err(CoreError::Repository(RepositoryError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_blank_name() {
        let mut repo = MockRepo::new();
        repo.expect_update().never();

        let service = PokemonService::new(Arc::new(repo));
        let result = service.update(1, PokemonUpdate::rename("")).await;

        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn test_list_empty_store_is_empty_list() {
        let mut repo = MockRepo::new();
        repo.expect_list().returning(|| Ok(Vec::new()));

        let service = PokemonService::new(Arc::new(repo));
        assert!(service.list().await.unwrap().is_empty());
    }
}
