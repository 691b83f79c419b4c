//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! Entities are served as-is from `pokedex-core`; these wrap them where
//! the API adds an envelope.

use pokedex_core::Pokemon;
use serde::Serialize;

/// Greeting served at `/`.
#[derive(Debug, Serialize)]
pub struct WelcomeMessage {
    pub message: &'static str,
}

impl WelcomeMessage {
    pub const fn new() -> Self {
        Self {
            message: "Welcome to the Pokémon Lookup API!",
        }
    }
}

impl Default for WelcomeMessage {
    fn default() -> Self {
        Self::new()
    }
}

/// Envelope returned by create, update and delete.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: &'static str,
    pub pokemon: Pokemon,
}

impl MutationResponse {
    pub const fn added(pokemon: Pokemon) -> Self {
        Self {
            message: "Pokémon added successfully",
            pokemon,
        }
    }

    pub const fn updated(pokemon: Pokemon) -> Self {
        Self {
            message: "Pokémon updated successfully",
            pokemon,
        }
    }

    pub const fn deleted(pokemon: Pokemon) -> Self {
        Self {
            message: "Pokémon deleted successfully",
            pokemon,
        }
    }
}
