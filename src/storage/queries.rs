//! Basic database query operations

use super::{models::*, schema::PlayerStore};
use crate::cli::types::Timestamp;
use crate::error::Result;
use rusqlite::{params, Row};
use tracing::debug;

/// Records whose `last_roll` is older than this many days are eligible for
/// deletion by [`PlayerStore::clear_inactive_records`].
pub const RETENTION_DAYS: i64 = 30;

impl PlayerStore {
    /// Look up a player's flavour, creating the record on first sight.
    ///
    /// A never-seen triple gets a fresh row with no flavour and the call
    /// returns `None`. Either way `last_roll` is set to `now`, so every
    /// lookup doubles as an activity heartbeat.
    pub fn get_flavour(
        &mut self,
        who: &impl PlayerIdentity,
        now: Timestamp,
    ) -> Result<Option<String>> {
        let flavour = self.conn.query_row(
            "INSERT INTO players (server, channel, player, flavour, last_roll)
             VALUES (?, ?, ?, NULL, ?)
             ON CONFLICT(server, channel, player)
             DO UPDATE SET last_roll = excluded.last_roll
             RETURNING flavour",
            params![
                who.server_id().as_u64(),
                who.channel_id().as_u64(),
                who.player_id().as_u64(),
                now
            ],
            |row| row.get(0),
        )?;

        debug!(
            server = who.server_id().as_u64(),
            channel = who.channel_id().as_u64(),
            player = who.player_id().as_u64(),
            "flavour lookup"
        );

        Ok(flavour)
    }

    /// Set (or clear) a player's flavour, creating the record if absent.
    /// Also touches `last_roll`.
    pub fn set_flavour(
        &mut self,
        who: &impl PlayerIdentity,
        flavour: Option<&str>,
        now: Timestamp,
    ) -> Result<()> {
        self.conn.execute(
            "INSERT INTO players (server, channel, player, flavour, last_roll)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(server, channel, player)
             DO UPDATE SET flavour = excluded.flavour,
                           last_roll = excluded.last_roll",
            params![
                who.server_id().as_u64(),
                who.channel_id().as_u64(),
                who.player_id().as_u64(),
                flavour,
                now
            ],
        )?;
        Ok(())
    }

    /// Delete every record whose `last_roll` is strictly older than
    /// `now` minus [`RETENTION_DAYS`]. Records that never rolled
    /// (`last_roll` NULL) are left alone. Returns the number of records
    /// removed.
    pub fn clear_inactive_records(&mut self, now: Timestamp) -> Result<usize> {
        let cutoff = now.minus_days(RETENTION_DAYS);

        let removed = self.conn.execute(
            "DELETE FROM players
             WHERE last_roll IS NOT NULL AND last_roll < ?",
            params![cutoff],
        )?;

        debug!(removed, %cutoff, "cleared inactive records");

        Ok(removed)
    }

    /// Fetch one record by identity triple, if present.
    pub fn record(&self, who: &impl PlayerIdentity) -> Result<Option<PlayerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT server, channel, player, flavour, last_roll
             FROM players
             WHERE server = ? AND channel = ? AND player = ?",
        )?;

        let result = stmt.query_row(
            params![
                who.server_id().as_u64(),
                who.channel_id().as_u64(),
                who.player_id().as_u64()
            ],
            |row| Self::row_to_record(row),
        );

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get all records from the store, ordered by identity triple.
    pub fn all_records(&self) -> Result<Vec<PlayerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT server, channel, player, flavour, last_roll
             FROM players
             ORDER BY server, channel, player",
        )?;

        let rows = stmt.query_map([], |row| Self::row_to_record(row))?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Helper to convert a database row to a PlayerRecord
    pub(crate) fn row_to_record(row: &Row) -> rusqlite::Result<PlayerRecord> {
        use crate::cli::types::{ChannelId, PlayerId, ServerId};

        Ok(PlayerRecord {
            server: ServerId::new(row.get(0)?),
            channel: ChannelId::new(row.get(1)?),
            player: PlayerId::new(row.get(2)?),
            flavour: row.get(3)?,
            last_roll: row.get(4)?,
        })
    }
}
