//! Row types and mapping helpers for `SQLite` queries.

use std::collections::HashMap;

use pokedex_core::{Ability, Pokemon, PokemonType, RepositoryError, Stat};

/// Shared SELECT column list for pokemon queries.
pub const POKEMON_SELECT_COLUMNS: &str =
    "id, name, height, weight, xp, image_url, pokemon_url";

#[derive(sqlx::FromRow)]
pub struct PokemonRow {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub xp: i64,
    pub image_url: Option<String>,
    pub pokemon_url: Option<String>,
}

#[derive(sqlx::FromRow)]
pub struct AbilityRow {
    pub pokemon_id: i64,
    pub name: String,
    pub is_hidden: bool,
}

#[derive(sqlx::FromRow)]
pub struct StatRow {
    pub pokemon_id: i64,
    pub name: String,
    pub base_stat: i64,
}

#[derive(sqlx::FromRow)]
pub struct TypeRow {
    pub pokemon_id: i64,
    pub name: String,
}

impl From<AbilityRow> for Ability {
    fn from(row: AbilityRow) -> Self {
        Self::new(row.name, row.is_hidden)
    }
}

impl From<StatRow> for Stat {
    fn from(row: StatRow) -> Self {
        Self::new(row.name, row.base_stat)
    }
}

impl From<TypeRow> for PokemonType {
    fn from(row: TypeRow) -> Self {
        Self::new(row.name)
    }
}

/// Children of one or more owners, keyed by `pokemon_id`.
#[derive(Default)]
pub struct ChildSets {
    pub abilities: HashMap<i64, Vec<Ability>>,
    pub stats: HashMap<i64, Vec<Stat>>,
    pub types: HashMap<i64, Vec<PokemonType>>,
}

impl ChildSets {
    pub fn new(abilities: Vec<AbilityRow>, stats: Vec<StatRow>, types: Vec<TypeRow>) -> Self {
        let mut sets = Self::default();
        for row in abilities {
            sets.abilities.entry(row.pokemon_id).or_default().push(row.into());
        }
        for row in stats {
            sets.stats.entry(row.pokemon_id).or_default().push(row.into());
        }
        for row in types {
            sets.types.entry(row.pokemon_id).or_default().push(row.into());
        }
        sets
    }

    /// Attach this owner's children to its row, consuming them from the set.
    pub fn assemble(&mut self, row: PokemonRow) -> Pokemon {
        let id = row.id;
        Pokemon {
            id,
            name: row.name,
            height: row.height,
            weight: row.weight,
            xp: row.xp,
            image_url: row.image_url,
            pokemon_url: row.pokemon_url,
            abilities: self.abilities.remove(&id).unwrap_or_default(),
            stats: self.stats.remove(&id).unwrap_or_default(),
            types: self.types.remove(&id).unwrap_or_default(),
        }
    }
}

/// Map `sqlx` errors to `RepositoryError`.
pub fn map_sqlx_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return RepositoryError::AlreadyExists(db.message().to_string());
        }
        if db.is_foreign_key_violation() || db.is_check_violation() {
            return RepositoryError::Constraint(db.message().to_string());
        }
    }
    RepositoryError::Storage(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_attaches_only_own_children() {
        let mut sets = ChildSets::new(
            vec![
                AbilityRow {
                    pokemon_id: 1,
                    name: "Overgrow".to_string(),
                    is_hidden: false,
                },
                AbilityRow {
                    pokemon_id: 4,
                    name: "Blaze".to_string(),
                    is_hidden: false,
                },
            ],
            Vec::new(),
            vec![TypeRow {
                pokemon_id: 1,
                name: "Grass".to_string(),
            }],
        );

        let pokemon = sets.assemble(PokemonRow {
            id: 1,
            name: "Bulbasaur".to_string(),
            height: 7,
            weight: 69,
            xp: 64,
            image_url: None,
            pokemon_url: None,
        });

        assert_eq!(pokemon.abilities, vec![Ability::new("Overgrow", false)]);
        assert_eq!(pokemon.types, vec![PokemonType::new("Grass")]);
        assert!(pokemon.stats.is_empty());
        assert!(sets.abilities.contains_key(&4));
    }
}
