//! `AppCore` - the primary application facade.
//!
//! Adapters (CLI, web) receive an `AppCore` instance and use it to access
//! all functionality.

use crate::ports::{Repos, SeedSourcePort};
use std::sync::Arc;

use super::{PokemonService, SeedLoader};

/// The core application facade.
///
/// Constructed at the adapter's composition root (main.rs or bootstrap.rs)
/// with concrete repository and seed source implementations.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let core = AppCore::new(repos, Arc::new(DefaultSeedClient::new(&config)?));
///
/// core.seeder().load_seed_data().await?;
/// let all = core.pokemon().list().await?;
/// ```
pub struct AppCore {
    pokemon: PokemonService,
    seeder: SeedLoader,
}

impl AppCore {
    /// Create a new `AppCore` with the given repositories and seed source.
    pub fn new(repos: Repos, seed_source: Arc<dyn SeedSourcePort>) -> Self {
        Self {
            pokemon: PokemonService::new(repos.pokemon.clone()),
            seeder: SeedLoader::new(seed_source, repos.pokemon),
        }
    }

    /// Access the Pokémon service.
    pub const fn pokemon(&self) -> &PokemonService {
        &self.pokemon
    }

    /// Access the seed loader.
    pub const fn seeder(&self) -> &SeedLoader {
        &self.seeder
    }
}
