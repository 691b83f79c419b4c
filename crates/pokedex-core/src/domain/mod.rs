//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, etc.).
//!
//! # Structure
//!
//! - `pokemon` - The entity and its child collections (`Pokemon`, `Ability`, `Stat`, `PokemonType`)
//! - `validation` - Field validation shared by the create, update and seed paths

mod pokemon;
pub mod validation;

pub use pokemon::{Ability, Pokemon, PokemonType, PokemonUpdate, Stat};
pub use validation::{ValidationError, validate_pokemon, validate_update};
