//! Pokémon domain types.
//!
//! These types represent the persisted entity and its owned child
//! collections, independent of any infrastructure concerns.

use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Child Types
// ─────────────────────────────────────────────────────────────────────────────

/// An ability owned by a Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Ability name (e.g., "overgrow").
    pub name: String,
    /// Whether this is a hidden ability.
    #[serde(default)]
    pub is_hidden: bool,
}

impl Ability {
    pub fn new(name: impl Into<String>, is_hidden: bool) -> Self {
        Self {
            name: name.into(),
            is_hidden,
        }
    }
}

/// A base stat owned by a Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Stat name (e.g., "hp", "attack").
    pub name: String,
    /// Base value of the stat.
    #[serde(default)]
    pub base_stat: i64,
}

impl Stat {
    pub fn new(name: impl Into<String>, base_stat: i64) -> Self {
        Self {
            name: name.into(),
            base_stat,
        }
    }
}

/// An elemental type owned by a Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    /// Type name (e.g., "grass").
    pub name: String,
}

impl PokemonType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Entity
// ─────────────────────────────────────────────────────────────────────────────

/// A Pokémon together with its abilities, stats and types.
///
/// The identifier is assigned by the caller (or the seed dataset), never by
/// the store, so the same type is used for both creation and reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Caller-assigned identifier (positive).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Height in decimetres.
    #[serde(default)]
    pub height: i64,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: i64,
    /// Base experience yield.
    #[serde(default)]
    pub xp: i64,
    /// Sprite/artwork URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Detail page URL.
    #[serde(default)]
    pub pokemon_url: Option<String>,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Create a Pokémon with the given id and name and everything else defaulted.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            height: 0,
            weight: 0,
            xp: 0,
            image_url: None,
            pokemon_url: None,
            abilities: Vec::new(),
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_measurements(mut self, height: i64, weight: i64, xp: i64) -> Self {
        self.height = height;
        self.weight = weight;
        self.xp = xp;
        self
    }

    #[must_use]
    pub fn with_urls(mut self, image_url: Option<String>, pokemon_url: Option<String>) -> Self {
        self.image_url = image_url;
        self.pokemon_url = pokemon_url;
        self
    }

    #[must_use]
    pub fn with_abilities(mut self, abilities: Vec<Ability>) -> Self {
        self.abilities = abilities;
        self
    }

    #[must_use]
    pub fn with_stats(mut self, stats: Vec<Stat>) -> Self {
        self.stats = stats;
        self
    }

    #[must_use]
    pub fn with_types(mut self, types: Vec<PokemonType>) -> Self {
        self.types = types;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Partial Update
// ─────────────────────────────────────────────────────────────────────────────

/// Partial update for an existing Pokémon.
///
/// Every field except `name` is optional; `None` leaves the stored value
/// untouched. The URL fields distinguish "absent" (`None`) from an explicit
/// JSON `null` (`Some(None)`), which clears the stored value. A supplied child
/// list replaces that whole collection, an empty list clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonUpdate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xp: Option<i64>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub pokemon_url: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abilities: Option<Vec<Ability>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<PokemonType>>,
}

impl PokemonUpdate {
    /// Create an update that only renames.
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether any child collection is being replaced.
    pub const fn replaces_children(&self) -> bool {
        self.abilities.is_some() || self.stats.is_some() || self.types.is_some()
    }

    /// Apply this update to an in-memory entity, field by field.
    pub fn apply_to(&self, pokemon: &mut Pokemon) {
        pokemon.name.clone_from(&self.name);
        if let Some(height) = self.height {
            pokemon.height = height;
        }
        if let Some(weight) = self.weight {
            pokemon.weight = weight;
        }
        if let Some(xp) = self.xp {
            pokemon.xp = xp;
        }
        if let Some(image_url) = &self.image_url {
            pokemon.image_url.clone_from(image_url);
        }
        if let Some(pokemon_url) = &self.pokemon_url {
            pokemon.pokemon_url.clone_from(pokemon_url);
        }
        if let Some(abilities) = &self.abilities {
            pokemon.abilities.clone_from(abilities);
        }
        if let Some(stats) = &self.stats {
            pokemon.stats.clone_from(stats);
        }
        if let Some(types) = &self.types {
            pokemon.types.clone_from(types);
        }
    }
}

/// Deserialize a field that is present in the payload (possibly `null`).
///
/// Combined with `#[serde(default)]`, an absent field stays `None` while an
/// explicit `null` becomes `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
