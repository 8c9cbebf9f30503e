//! Database schema and connection management

use crate::error::{KeeperError, Result};
use dirs::data_dir;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Store for per-player game records
pub struct PlayerStore {
    pub(crate) conn: Connection,
}

impl PlayerStore {
    /// Open the store at the default platform data path and ensure the
    /// schema exists
    pub fn new() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Open (creating if absent) the database file at `path` and ensure the
    /// schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure the data directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Create an in-memory store, mainly for tests
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Default path to the database file
    pub fn default_path() -> Result<PathBuf> {
        let data_dir = data_dir().ok_or(KeeperError::NoDataDir)?;
        Ok(data_dir.join("rollkeeper").join("players.db"))
    }

    /// Initialize the database schema. Safe to call on an already
    /// initialized file.
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        // Create players table
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                server INTEGER NOT NULL,
                channel INTEGER NOT NULL,
                player INTEGER NOT NULL,
                flavour TEXT,
                last_roll INTEGER
            )",
            [],
        )?;

        // One record per (server, channel, player) triple; the upserts in
        // queries.rs rely on this index for conflict detection
        self.conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_players_key
             ON players(server, channel, player)",
            [],
        )?;

        // Index for the retention sweep
        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_players_last_roll
             ON players(last_roll)
             WHERE last_roll IS NOT NULL",
            [],
        )?;

        Ok(())
    }
}
