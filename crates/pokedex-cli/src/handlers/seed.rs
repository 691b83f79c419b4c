//! Seed command handler.

use anyhow::{Context, Result};
use pokedex_axum::bootstrap::build_core;

use crate::bootstrap::base_config;
use crate::commands::SeedArgs;

/// Load the seed dataset into the database once and print the report.
pub async fn execute(args: SeedArgs) -> Result<()> {
    let mut config = base_config(args.database)?;
    if let Some(url) = args.seed_url {
        config = config.with_seed_url(url);
    }

    tracing::info!(
        target: "pokedex.cli",
        database = %config.database_path.display(),
        seed_url = config.seed.url(),
        "Running seed command"
    );

    let core = build_core(&config).await?;
    let report = core
        .seeder()
        .load_seed_data()
        .await
        .context("Failed to load seed data")?;

    tracing::info!(
        target: "pokedex.cli",
        inserted = report.inserted,
        skipped = report.skipped,
        "Seed command finished"
    );

    println!("Database: {}", config.database_path.display());
    println!(
        "Fetched {} records: {} inserted, {} already present ({} stored)",
        report.fetched, report.inserted, report.skipped, report.stored
    );
    Ok(())
}
