//! Seed loader - one-time synchronization of the external dataset into the store.

use serde::Serialize;
use std::sync::Arc;

use crate::domain::validate_pokemon;
use crate::ports::{CoreError, PokemonRepository, RepositoryError, SeedSourcePort};

/// Outcome of a seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Records returned by the source.
    pub fetched: usize,
    /// Records newly written to the store.
    pub inserted: usize,
    /// Records whose id was already stored.
    pub skipped: usize,
    /// Pokémon in the store once the run finished.
    pub stored: u64,
}

/// Populates the store from a seed source, skipping ids that already exist.
///
/// Re-running is idempotent: stored records are never modified.
pub struct SeedLoader {
    source: Arc<dyn SeedSourcePort>,
    repo: Arc<dyn PokemonRepository>,
}

impl SeedLoader {
    pub fn new(source: Arc<dyn SeedSourcePort>, repo: Arc<dyn PokemonRepository>) -> Self {
        Self { source, repo }
    }

    /// Fetch the dataset and insert every record whose id is not yet stored.
    ///
    /// Each record is inserted together with its children in its own
    /// transaction. A fetch, parse or validation failure aborts the load
    /// before anything is written.
    pub async fn load_seed_data(&self) -> Result<SeedReport, CoreError> {
        let source = self.source.describe();
        tracing::info!(target: "pokedex.seed", %source, "Loading seed data");

        let records = self.source.fetch_all().await.inspect_err(|e| {
            tracing::error!(target: "pokedex.seed", %source, error = %e, "Failed to fetch seed data");
        })?;

        for record in &records {
            validate_pokemon(record).inspect_err(|e| {
                tracing::error!(target: "pokedex.seed", id = record.id, error = %e, "Invalid seed record");
            })?;
        }

        let mut report = SeedReport {
            fetched: records.len(),
            ..SeedReport::default()
        };

        for record in &records {
            if self.repo.exists(record.id).await? {
                report.skipped += 1;
                continue;
            }

            match self.repo.insert(record).await {
                Ok(_) => report.inserted += 1,
                // Lost a race with a concurrent writer; the stored row wins.
                Err(RepositoryError::AlreadyExists(_)) => report.skipped += 1,
                Err(e) => return Err(e.into()),
            }
        }

        report.stored = self.repo.count().await?;

        tracing::info!(
            target: "pokedex.seed",
            fetched = report.fetched,
            inserted = report.inserted,
            skipped = report.skipped,
            stored = report.stored,
            "Seed data loaded"
        );
        Ok(report)
    }
}
