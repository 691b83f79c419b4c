//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod pokemon_service;
mod seed_loader;

pub use app_core::AppCore;
pub use pokemon_service::PokemonService;
pub use seed_loader::{SeedLoader, SeedReport};
