//! `SQLite` implementation of the `PokemonRepository` trait.
//!
//! Abilities, stats and types live in their own tables keyed by
//! `pokemon_id` with `ON DELETE CASCADE`. Every operation that touches more
//! than one statement, reads included, runs in a single transaction so it
//! observes one consistent state.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};

use pokedex_core::{
    Ability, Pokemon, PokemonRepository, PokemonType, PokemonUpdate, RepositoryError, Stat,
};

use super::row_mappers::{
    AbilityRow, ChildSets, POKEMON_SELECT_COLUMNS, PokemonRow, StatRow, TypeRow, map_sqlx_error,
};

/// `SQLite` implementation of the Pokémon repository.
pub struct SqlitePokemonRepository {
    pool: SqlitePool,
}

impl SqlitePokemonRepository {
    /// Create a new `SQLite` Pokémon repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound(format!("Pokémon with ID {id}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Connection-level helpers (usable inside or outside a transaction)
// ─────────────────────────────────────────────────────────────────────────────

async fn fetch_pokemon(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Pokemon>, RepositoryError> {
    let sql = format!("SELECT {POKEMON_SELECT_COLUMNS} FROM pokemon WHERE id = ?");
    let Some(row) = sqlx::query_as::<_, PokemonRow>(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx_error)?
    else {
        return Ok(None);
    };

    let abilities = sqlx::query_as::<_, AbilityRow>(
        "SELECT pokemon_id, name, is_hidden FROM abilities WHERE pokemon_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx_error)?;

    let stats = sqlx::query_as::<_, StatRow>(
        "SELECT pokemon_id, name, base_stat FROM stats WHERE pokemon_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx_error)?;

    let types = sqlx::query_as::<_, TypeRow>(
        "SELECT pokemon_id, name FROM types WHERE pokemon_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *conn)
    .await
    .map_err(map_sqlx_error)?;

    Ok(Some(ChildSets::new(abilities, stats, types).assemble(row)))
}

async fn insert_abilities(
    conn: &mut SqliteConnection,
    pokemon_id: i64,
    abilities: &[Ability],
) -> Result<(), RepositoryError> {
    for ability in abilities {
        sqlx::query("INSERT INTO abilities (pokemon_id, name, is_hidden) VALUES (?, ?, ?)")
            .bind(pokemon_id)
            .bind(&ability.name)
            .bind(ability.is_hidden)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }
    Ok(())
}

async fn insert_stats(
    conn: &mut SqliteConnection,
    pokemon_id: i64,
    stats: &[Stat],
) -> Result<(), RepositoryError> {
    for stat in stats {
        sqlx::query("INSERT INTO stats (pokemon_id, name, base_stat) VALUES (?, ?, ?)")
            .bind(pokemon_id)
            .bind(&stat.name)
            .bind(stat.base_stat)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }
    Ok(())
}

async fn insert_types(
    conn: &mut SqliteConnection,
    pokemon_id: i64,
    types: &[PokemonType],
) -> Result<(), RepositoryError> {
    for pokemon_type in types {
        sqlx::query("INSERT INTO types (pokemon_id, name) VALUES (?, ?)")
            .bind(pokemon_id)
            .bind(&pokemon_type.name)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }
    Ok(())
}

/// Delete every row of one child table for an owner.
async fn clear_children(
    conn: &mut SqliteConnection,
    table: ChildTable,
    pokemon_id: i64,
) -> Result<(), RepositoryError> {
    let sql = match table {
        ChildTable::Abilities => "DELETE FROM abilities WHERE pokemon_id = ?",
        ChildTable::Stats => "DELETE FROM stats WHERE pokemon_id = ?",
        ChildTable::Types => "DELETE FROM types WHERE pokemon_id = ?",
    };
    sqlx::query(sql)
        .bind(pokemon_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx_error)?;
    Ok(())
}

#[derive(Clone, Copy)]
enum ChildTable {
    Abilities,
    Stats,
    Types,
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PokemonRepository for SqlitePokemonRepository {
    async fn list(&self) -> Result<Vec<Pokemon>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let sql = format!("SELECT {POKEMON_SELECT_COLUMNS} FROM pokemon ORDER BY id");
        let rows = sqlx::query_as::<_, PokemonRow>(&sql)
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        if rows.is_empty() {
            tx.commit().await.map_err(map_sqlx_error)?;
            return Ok(Vec::new());
        }

        // One query per child table, grouped in memory by owner
        let abilities = sqlx::query_as::<_, AbilityRow>(
            "SELECT pokemon_id, name, is_hidden FROM abilities ORDER BY pokemon_id, id",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let stats = sqlx::query_as::<_, StatRow>(
            "SELECT pokemon_id, name, base_stat FROM stats ORDER BY pokemon_id, id",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        let types = sqlx::query_as::<_, TypeRow>(
            "SELECT pokemon_id, name FROM types ORDER BY pokemon_id, id",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;

        let mut children = ChildSets::new(abilities, stats, types);
        Ok(rows.into_iter().map(|row| children.assemble(row)).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pokemon")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        u64::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let (found,): (i64,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pokemon WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(found != 0)
    }

    async fn get_by_id(&self, id: i64) -> Result<Pokemon, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;
        let found = fetch_pokemon(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx_error)?;

        found.ok_or_else(|| not_found(id))
    }

    async fn find_by_name(&self, name: &str) -> Result<Pokemon, RepositoryError> {
        // SQLite's LOWER() only folds ASCII, so compare in Rust
        let needle = name.to_lowercase();
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let candidates: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, name FROM pokemon ORDER BY id")
                .fetch_all(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        let found = match candidates
            .into_iter()
            .find(|(_, candidate)| candidate.to_lowercase() == needle)
        {
            Some((id, _)) => fetch_pokemon(&mut tx, id).await?,
            None => None,
        };
        tx.commit().await.map_err(map_sqlx_error)?;

        found.ok_or_else(|| RepositoryError::NotFound(format!("Pokémon with name '{name}'")))
    }

    async fn insert(&self, pokemon: &Pokemon) -> Result<Pokemon, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        sqlx::query(
            r"
            INSERT INTO pokemon (id, name, height, weight, xp, image_url, pokemon_url)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(pokemon.id)
        .bind(&pokemon.name)
        .bind(pokemon.height)
        .bind(pokemon.weight)
        .bind(pokemon.xp)
        .bind(&pokemon.image_url)
        .bind(&pokemon.pokemon_url)
        .execute(&mut *tx)
        .await
        .map_err(|e| match map_sqlx_error(e) {
            RepositoryError::AlreadyExists(_) => {
                RepositoryError::AlreadyExists(format!("Pokémon with ID {}", pokemon.id))
            }
            other => other,
        })?;

        insert_abilities(&mut tx, pokemon.id, &pokemon.abilities).await?;
        insert_stats(&mut tx, pokemon.id, &pokemon.stats).await?;
        insert_types(&mut tx, pokemon.id, &pokemon.types).await?;

        let stored = fetch_pokemon(&mut tx, pokemon.id)
            .await?
            .ok_or_else(|| not_found(pokemon.id))?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(stored)
    }

    async fn update(&self, id: i64, update: &PokemonUpdate) -> Result<Pokemon, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let mut pokemon = fetch_pokemon(&mut tx, id)
            .await?
            .ok_or_else(|| not_found(id))?;
        update.apply_to(&mut pokemon);

        sqlx::query(
            "UPDATE pokemon SET name = ?, height = ?, weight = ?, xp = ?, image_url = ?, pokemon_url = ? WHERE id = ?",
        )
        .bind(&pokemon.name)
        .bind(pokemon.height)
        .bind(pokemon.weight)
        .bind(pokemon.xp)
        .bind(&pokemon.image_url)
        .bind(&pokemon.pokemon_url)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        // Supplied collections replace the stored ones wholesale
        if let Some(abilities) = &update.abilities {
            clear_children(&mut tx, ChildTable::Abilities, id).await?;
            insert_abilities(&mut tx, id, abilities).await?;
        }
        if let Some(stats) = &update.stats {
            clear_children(&mut tx, ChildTable::Stats, id).await?;
            insert_stats(&mut tx, id, stats).await?;
        }
        if let Some(types) = &update.types {
            clear_children(&mut tx, ChildTable::Types, id).await?;
            insert_types(&mut tx, id, types).await?;
        }

        let stored = fetch_pokemon(&mut tx, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<Pokemon, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let last_state = fetch_pokemon(&mut tx, id)
            .await?
            .ok_or_else(|| not_found(id))?;

        // Children go with it via ON DELETE CASCADE
        sqlx::query("DELETE FROM pokemon WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(last_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_database;
    use std::sync::Arc;

    async fn repo() -> SqlitePokemonRepository {
        SqlitePokemonRepository::new(setup_test_database().await.unwrap())
    }

    fn bulbasaur() -> Pokemon {
        Pokemon::new(1, "Bulbasaur")
            .with_measurements(7, 69, 64)
            .with_urls(
                Some("https://img.pokemondb.net/artwork/bulbasaur.jpg".to_string()),
                Some("https://pokeapi.co/api/v2/pokemon/1/".to_string()),
            )
            .with_abilities(vec![
                Ability::new("Overgrow", false),
                Ability::new("Chlorophyll", true),
            ])
            .with_stats(vec![Stat::new("hp", 45), Stat::new("attack", 49)])
            .with_types(vec![PokemonType::new("Grass"), PokemonType::new("Poison")])
    }

    async fn child_count(repo: &SqlitePokemonRepository, table: &str, id: i64) -> i64 {
        let (count,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE pokemon_id = ?"))
                .bind(id)
                .fetch_one(repo.pool())
                .await
                .unwrap();
        count
    }

    #[tokio::test]
    async fn test_insert_then_get_round_trips_children_in_order() {
        let repo = repo().await;

        let created = repo.insert(&bulbasaur()).await.unwrap();
        assert_eq!(created, bulbasaur());

        let fetched = repo.get_by_id(1).await.unwrap();
        assert_eq!(fetched, bulbasaur());
        assert_eq!(fetched.abilities[1], Ability::new("Chlorophyll", true));
    }

    #[tokio::test]
    async fn test_insert_existing_id_conflicts_and_keeps_original() {
        let repo = repo().await;
        repo.insert(&bulbasaur()).await.unwrap();

        let impostor = Pokemon::new(1, "Missingno")
            .with_abilities(vec![Ability::new("Glitch", false)]);
        let result = repo.insert(&impostor).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists(_))));
        assert_eq!(repo.get_by_id(1).await.unwrap(), bulbasaur());
        assert_eq!(child_count(&repo, "abilities", 1).await, 2);
    }

    /// Make every insert of a `Ghost` type fail while leaving reads intact.
    async fn reject_ghost_types(repo: &SqlitePokemonRepository) {
        sqlx::query(
            r"
            CREATE TRIGGER reject_ghost BEFORE INSERT ON types
            WHEN NEW.name = 'Ghost'
            BEGIN SELECT RAISE(ABORT, 'ghost types rejected'); END
            ",
        )
        .execute(repo.pool())
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_failed_child_insert_rolls_back_create() {
        let repo = repo().await;
        reject_ghost_types(&repo).await;

        let gastly = Pokemon::new(92, "Gastly")
            .with_abilities(vec![Ability::new("Levitate", false)])
            .with_types(vec![PokemonType::new("Poison"), PokemonType::new("Ghost")]);

        assert!(repo.insert(&gastly).await.is_err());
        assert!(!repo.exists(92).await.unwrap());
        for table in ["abilities", "stats", "types"] {
            assert_eq!(child_count(&repo, table, 92).await, 0, "{table} left behind");
        }
    }

    #[tokio::test]
    async fn test_failed_child_replace_rolls_back_update() {
        let repo = repo().await;
        repo.insert(&bulbasaur()).await.unwrap();
        reject_ghost_types(&repo).await;

        let update = PokemonUpdate {
            height: Some(15),
            image_url: Some(None),
            abilities: Some(vec![Ability::new("Cursed Body", false)]),
            types: Some(vec![PokemonType::new("Ghost")]),
            ..PokemonUpdate::rename("Gengar")
        };

        assert!(repo.update(1, &update).await.is_err());
        assert_eq!(repo.get_by_id(1).await.unwrap(), bulbasaur());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_reads_never_mix_states_during_updates() {
        let dir = tempfile::tempdir().unwrap();
        let pool = crate::setup::setup_database(&dir.path().join("pokedex.db"))
            .await
            .unwrap();
        let repo = Arc::new(SqlitePokemonRepository::new(pool));
        repo.insert(&Pokemon::new(4, "Alpha").with_abilities(vec![Ability::new("Alpha", false)]))
            .await
            .unwrap();

        // Name and ability always change together
        let writer = {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move {
                for round in 0..40 {
                    let tag = if round % 2 == 0 { "Beta" } else { "Alpha" };
                    let update = PokemonUpdate {
                        abilities: Some(vec![Ability::new(tag, false)]),
                        ..PokemonUpdate::rename(tag)
                    };
                    repo.update(4, &update).await.unwrap();
                }
            })
        };

        for _ in 0..40 {
            let by_id = repo.get_by_id(4).await.unwrap();
            let by_name = repo.find_by_name(&by_id.name).await;
            let listed = repo.list().await.unwrap();

            assert_eq!(by_id.abilities[0].name, by_id.name);
            assert_eq!(listed[0].abilities[0].name, listed[0].name);
            // The name may have flipped since, but a hit is always whole
            if let Ok(found) = by_name {
                assert_eq!(found.abilities[0].name, found.name);
            }
        }

        writer.await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_cascades_to_children() {
        let repo = repo().await;
        repo.insert(&bulbasaur()).await.unwrap();

        let deleted = repo.delete(1).await.unwrap();
        assert_eq!(deleted, bulbasaur());

        for table in ["abilities", "stats", "types"] {
            assert_eq!(child_count(&repo, table, 1).await, 0, "{table} not cleared");
        }
        assert!(!repo.exists(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_rename_only_leaves_everything_else() {
        let repo = repo().await;
        repo.insert(&bulbasaur()).await.unwrap();

        let updated = repo
            .update(1, &PokemonUpdate::rename("Bulby"))
            .await
            .unwrap();

        let mut expected = bulbasaur();
        expected.name = "Bulby".to_string();
        assert_eq!(updated, expected);
        assert_eq!(repo.get_by_id(1).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_update_empty_abilities_clears_only_abilities() {
        let repo = repo().await;
        repo.insert(&bulbasaur()).await.unwrap();

        let update = PokemonUpdate {
            abilities: Some(Vec::new()),
            ..PokemonUpdate::rename("Bulbasaur")
        };
        let updated = repo.update(1, &update).await.unwrap();

        assert!(updated.abilities.is_empty());
        assert_eq!(updated.stats.len(), 2);
        assert_eq!(updated.types.len(), 2);
        assert_eq!(child_count(&repo, "abilities", 1).await, 0);
    }

    #[tokio::test]
    async fn test_update_sets_scalars_and_clears_url() {
        let repo = repo().await;
        repo.insert(&bulbasaur()).await.unwrap();

        let update = PokemonUpdate {
            height: Some(10),
            image_url: Some(None),
            types: Some(vec![PokemonType::new("Grass")]),
            ..PokemonUpdate::rename("Bulbasaur")
        };
        let updated = repo.update(1, &update).await.unwrap();

        assert_eq!(updated.height, 10);
        assert_eq!(updated.weight, 69);
        assert_eq!(updated.image_url, None);
        assert!(updated.pokemon_url.is_some());
        assert_eq!(updated.types, vec![PokemonType::new("Grass")]);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let repo = repo().await;

        assert!(repo.get_by_id(999).await.unwrap_err().is_not_found());
        assert!(repo.delete(999).await.unwrap_err().is_not_found());
        assert!(
            repo.update(999, &PokemonUpdate::rename("Nobody"))
                .await
                .unwrap_err()
                .is_not_found()
        );
        assert!(repo.find_by_name("nobody").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_find_by_name_is_case_insensitive_lowest_id_first() {
        let repo = repo().await;
        repo.insert(&Pokemon::new(7, "Flabébé")).await.unwrap();
        repo.insert(&Pokemon::new(9, "FLABÉBÉ")).await.unwrap();

        let found = repo.find_by_name("flabébé").await.unwrap();
        assert_eq!(found.id, 7);
    }

    #[tokio::test]
    async fn test_list_is_ordered_with_children() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        repo.insert(&Pokemon::new(4, "Charmander").with_types(vec![PokemonType::new("Fire")]))
            .await
            .unwrap();
        repo.insert(&bulbasaur()).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(all[0], bulbasaur());
        assert_eq!(all[1].types, vec![PokemonType::new("Fire")]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
