//! Wall-clock timestamps for player activity tracking.

use crate::error::{KeeperError, Result};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::ToSql;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display/parse pattern for timestamps: zero-padded, 24-hour, so the
/// rendered form sorts chronologically.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A UTC wall-clock instant, stored in the database as Unix epoch seconds.
///
/// Operations that read the clock take a `Timestamp` argument instead of
/// calling into a global time source, so tests can pass fixed instants.
///
/// # Examples
///
/// ```rust
/// use rollkeeper::Timestamp;
///
/// let ts: Timestamp = "2020-05-01 00:00:00".parse().unwrap();
/// assert_eq!(ts.to_string(), "2020-05-01 00:00:00");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a Timestamp from a chrono UTC datetime.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// The current time, truncated to whole seconds to match the stored
    /// precision.
    pub fn now() -> Self {
        let now = Utc::now();
        Self::from_unix(now.timestamp()).unwrap_or(Self(now))
    }

    /// Reconstruct a Timestamp from Unix epoch seconds, as stored in the
    /// `last_roll` column. Returns `None` for values chrono cannot represent.
    pub fn from_unix(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Unix epoch seconds, the stored representation.
    pub fn as_unix(&self) -> i64 {
        self.0.timestamp()
    }

    /// This instant moved back by `days` whole days. Used to compute the
    /// retention cutoff.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = KeeperError;

    fn from_str(s: &str) -> Result<Self> {
        let naive = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)?;
        Ok(Self(naive.and_utc()))
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_unix()))
    }
}

impl FromSql for Timestamp {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let secs = i64::column_result(value)?;
        Self::from_unix(secs).ok_or(FromSqlError::OutOfRange(secs))
    }
}
