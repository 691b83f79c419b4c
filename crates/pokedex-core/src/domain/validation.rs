//! Field validation for Pokémon payloads.
//!
//! Both the create path and the seed loader validate through here, so the
//! store only ever holds well-formed rows.

use thiserror::Error;
use url::Url;

use super::pokemon::{Ability, Pokemon, PokemonType, PokemonUpdate, Stat};

/// A single rejected field.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ID must be a positive integer, got {0}")]
    InvalidId(i64),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: i64 },

    #[error("{field} is not a valid http(s) URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    #[error("{collection} entry {index} has an empty name")]
    EmptyChildName {
        collection: &'static str,
        index: usize,
    },
}

/// Validate a full entity for insertion.
pub fn validate_pokemon(pokemon: &Pokemon) -> Result<(), ValidationError> {
    if pokemon.id < 1 {
        return Err(ValidationError::InvalidId(pokemon.id));
    }
    validate_name(&pokemon.name)?;

    validate_non_negative("height", pokemon.height)?;
    validate_non_negative("weight", pokemon.weight)?;
    validate_non_negative("xp", pokemon.xp)?;

    validate_optional_url("image_url", pokemon.image_url.as_deref())?;
    validate_optional_url("pokemon_url", pokemon.pokemon_url.as_deref())?;

    validate_children(&pokemon.abilities, &pokemon.stats, &pokemon.types)
}

/// Validate the supplied fields of a partial update.
pub fn validate_update(update: &PokemonUpdate) -> Result<(), ValidationError> {
    validate_name(&update.name)?;

    for (field, value) in [
        ("height", update.height),
        ("weight", update.weight),
        ("xp", update.xp),
    ] {
        if let Some(value) = value {
            validate_non_negative(field, value)?;
        }
    }

    validate_optional_url("image_url", update.image_url.clone().flatten().as_deref())?;
    validate_optional_url(
        "pokemon_url",
        update.pokemon_url.clone().flatten().as_deref(),
    )?;

    validate_children(
        update.abilities.as_deref().unwrap_or_default(),
        update.stats.as_deref().unwrap_or_default(),
        update.types.as_deref().unwrap_or_default(),
    )
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

const fn validate_non_negative(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

fn validate_optional_url(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(value) = value else {
        return Ok(());
    };

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.host().is_some() => Ok(()),
        _ => Err(ValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

fn validate_children(
    abilities: &[Ability],
    stats: &[Stat],
    types: &[PokemonType],
) -> Result<(), ValidationError> {
    let names = [
        ("abilities", abilities.iter().map(|a| a.name.as_str()).collect::<Vec<_>>()),
        ("stats", stats.iter().map(|s| s.name.as_str()).collect()),
        ("types", types.iter().map(|t| t.name.as_str()).collect()),
    ];

    for (collection, names) in names {
        if let Some(index) = names.iter().position(|n| n.trim().is_empty()) {
            return Err(ValidationError::EmptyChildName { collection, index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pokemon_passes() {
        let pokemon = Pokemon::new(25, "Pikachu")
            .with_measurements(4, 60, 112)
            .with_urls(
                Some("https://img.pokemondb.net/pikachu.png".into()),
                Some("http://pokeapi.co/api/v2/pokemon/25/".into()),
            );
        assert_eq!(validate_pokemon(&pokemon), Ok(()));
    }

    #[test]
    fn test_zero_id_rejected() {
        assert_eq!(
            validate_pokemon(&Pokemon::new(0, "Missingno")),
            Err(ValidationError::InvalidId(0))
        );
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            validate_pokemon(&Pokemon::new(1, "   ")),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let pokemon = Pokemon::new(1, "Bulbasaur").with_measurements(7, -1, 0);
        assert!(matches!(
            validate_pokemon(&pokemon),
            Err(ValidationError::Negative {
                field: "weight",
                value: -1
            })
        ));
    }

    #[test]
    fn test_malformed_url_rejected() {
        let pokemon = Pokemon::new(1, "Bulbasaur").with_urls(Some("not a url".into()), None);
        assert!(matches!(
            validate_pokemon(&pokemon),
            Err(ValidationError::InvalidUrl {
                field: "image_url",
                ..
            })
        ));

        let ftp = Pokemon::new(1, "Bulbasaur").with_urls(None, Some("ftp://host/file".into()));
        assert!(validate_pokemon(&ftp).is_err());
    }

    #[test]
    fn test_blank_child_name_rejected() {
        let pokemon = Pokemon::new(1, "Bulbasaur").with_types(vec![
            PokemonType::new("Grass"),
            PokemonType::new(""),
        ]);
        assert_eq!(
            validate_pokemon(&pokemon),
            Err(ValidationError::EmptyChildName {
                collection: "types",
                index: 1
            })
        );
    }

    #[test]
    fn test_update_only_checks_supplied_fields() {
        assert_eq!(validate_update(&PokemonUpdate::rename("Ivysaur")), Ok(()));

        let cleared = PokemonUpdate {
            image_url: Some(None),
            ..PokemonUpdate::rename("Ivysaur")
        };
        assert_eq!(validate_update(&cleared), Ok(()));

        let negative = PokemonUpdate {
            xp: Some(-5),
            ..PokemonUpdate::rename("Ivysaur")
        };
        assert!(validate_update(&negative).is_err());
    }
}
