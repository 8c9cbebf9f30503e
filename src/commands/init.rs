//! Schema bootstrap command implementation

use super::common::resolve_db_path;
use crate::storage::PlayerStore;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the init command: ensure the database file and schema exist.
pub fn handle_init(db: Option<PathBuf>, verbose: bool) -> Result<()> {
    let path = resolve_db_path(db)?;

    if verbose {
        println!("Opening database at {}...", path.display());
    }

    PlayerStore::open(&path)?;
    println!("Database ready at {}", path.display());

    Ok(())
}
