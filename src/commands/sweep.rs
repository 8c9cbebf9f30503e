//! Retention sweep command implementation

use super::common::open_store;
use crate::{cli::types::Timestamp, storage::RETENTION_DAYS};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the sweep command: delete records inactive for longer than the
/// retention window.
pub fn handle_sweep(db: Option<PathBuf>, verbose: bool) -> Result<()> {
    let mut store = open_store(db)?;
    let now = Timestamp::now();

    if verbose {
        println!(
            "Removing records with no activity since {}...",
            now.minus_days(RETENTION_DAYS)
        );
    }

    let removed = store.clear_inactive_records(now)?;
    println!("Removed {} inactive player record(s)", removed);

    Ok(())
}
