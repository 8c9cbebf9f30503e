//! Record listing command implementation

use super::common::open_store;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the show command: list stored player records.
pub fn handle_show(db: Option<PathBuf>, as_json: bool) -> Result<()> {
    let store = open_store(db)?;
    let records = store.all_records()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No player records");
        return Ok(());
    }

    for record in records {
        let flavour = record.flavour.as_deref().unwrap_or("-");
        let last_roll = record
            .last_roll
            .map(|ts| ts.to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "server={} channel={} player={} flavour={} last_roll={}",
            record.server, record.channel, record.player, flavour, last_roll
        );
    }

    Ok(())
}
