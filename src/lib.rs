//! Rollkeeper Player Persistence Library
//!
//! Storage layer for a dice-rolling chat-bot game: one SQLite record per
//! (server, channel, player) triple, holding the player's chosen flavour
//! tag and a last-activity timestamp.
//!
//! ## Features
//!
//! - **Flavour Lookup**: Read a player's flavour tag, creating the record
//!   on first sight and refreshing their last-roll timestamp
//! - **Retention Sweep**: Delete records with no activity inside a fixed
//!   30-day window
//! - **Injected Clock**: Every time-sensitive operation takes the current
//!   time as an argument, so tests run against fixed instants
//! - **Typed Ids**: Server, channel and player ids are distinct newtypes
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rollkeeper::{ChannelId, PlayerId, PlayerKey, PlayerStore, ServerId, Timestamp};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut store = PlayerStore::new()?;
//!
//! let key = PlayerKey::new(ServerId::new(10), ChannelId::new(11), PlayerId::new(12));
//! match store.get_flavour(&key, Timestamp::now())? {
//!     Some(flavour) => println!("rolling as {}", flavour),
//!     None => println!("no flavour set"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at a database file without passing `--db` every time:
//! ```bash
//! export ROLLKEEPER_DB=/srv/bot/players.db
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{ChannelId, PlayerId, ServerId, Timestamp};
pub use error::{KeeperError, Result};
pub use storage::{PlayerIdentity, PlayerKey, PlayerRecord, PlayerStore, RETENTION_DAYS};

pub const DB_PATH_ENV_VAR: &str = "ROLLKEEPER_DB";
