//! Common utilities and helper functions shared across commands.

use crate::{storage::PlayerStore, DB_PATH_ENV_VAR};
use anyhow::Result;
use std::path::PathBuf;

/// Resolve the database path: explicit flag, then the `ROLLKEEPER_DB`
/// environment variable, then the platform default.
pub fn resolve_db_path(db: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db {
        return Ok(path);
    }
    if let Ok(path) = std::env::var(DB_PATH_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    Ok(PlayerStore::default_path()?)
}

/// Open the store at the resolved path, creating file and schema if absent.
pub fn open_store(db: Option<PathBuf>) -> Result<PlayerStore> {
    Ok(PlayerStore::open(resolve_db_path(db)?)?)
}
