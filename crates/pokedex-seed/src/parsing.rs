//! Conversion of raw dataset records into domain entities.

use pokedex_core::{Ability, Pokemon, PokemonType, Stat};

use crate::models::RawPokemon;

/// Convert a raw record into a domain entity.
///
/// Blank URLs become `None` and names are trimmed. Domain validation is
/// left to the seed loader so that every record is checked the same way.
pub fn to_domain(raw: RawPokemon) -> Pokemon {
    Pokemon {
        id: raw.id,
        name: raw.name.map(|n| n.trim().to_string()).unwrap_or_default(),
        height: raw.height,
        weight: raw.weight,
        xp: raw.xp,
        image_url: non_blank(raw.image_url),
        pokemon_url: non_blank(raw.pokemon_url),
        abilities: raw
            .abilities
            .into_iter()
            .map(|a| Ability::new(a.name.trim(), a.is_hidden))
            .collect(),
        stats: raw
            .stats
            .into_iter()
            .map(|s| Stat::new(s.name.trim(), s.base_stat))
            .collect(),
        types: raw
            .types
            .into_iter()
            .map(|t| PokemonType::new(t.name.trim()))
            .collect(),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
