//! Paths command handler.

use anyhow::Result;

use pokedex_core::paths::{DATA_DIR_ENV, data_root, database_path};

/// Print the resolved data directory and database path in `key = value` form.
pub fn execute() -> Result<()> {
    let root = data_root()?;
    let db = database_path()?;
    let overridden = std::env::var_os(DATA_DIR_ENV).is_some();

    println!("data_root = {}", root.display());
    println!("database_path = {}", db.display());
    println!(
        "source = {}",
        if overridden { DATA_DIR_ENV } else { "platform default" }
    );
    Ok(())
}
