//! Flavour lookup and assignment command implementation

use super::common::open_store;
use crate::{
    cli::types::Timestamp,
    storage::{PlayerIdentity, PlayerKey},
};
use anyhow::Result;
use std::path::PathBuf;

/// Handle the flavour command: read a player's flavour (touching their
/// last-roll timestamp), or set it when `set` is given.
pub fn handle_flavour(
    key: PlayerKey,
    set: Option<String>,
    db: Option<PathBuf>,
    as_json: bool,
) -> Result<()> {
    let mut store = open_store(db)?;
    let now = Timestamp::now();

    let flavour = match set {
        Some(tag) => {
            store.set_flavour(&key, Some(tag.as_str()), now)?;
            Some(tag)
        }
        None => store.get_flavour(&key, now)?,
    };

    if as_json {
        let out = serde_json::json!({
            "server": key.server_id(),
            "channel": key.channel_id(),
            "player": key.player_id(),
            "flavour": flavour,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        match &flavour {
            Some(tag) => println!("{}", tag),
            None => println!("(no flavour set)"),
        }
    }

    Ok(())
}
