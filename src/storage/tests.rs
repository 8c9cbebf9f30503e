//! Unit tests for storage functionality

use super::*;
use crate::cli::types::{ChannelId, PlayerId, ServerId, Timestamp};
use rusqlite::params;

fn create_test_store() -> PlayerStore {
    // Create in-memory store for testing
    PlayerStore::new_in_memory().unwrap()
}

fn key(server: u64, channel: u64, player: u64) -> PlayerKey {
    PlayerKey::new(
        ServerId::new(server),
        ChannelId::new(channel),
        PlayerId::new(player),
    )
}

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

#[test]
fn test_store_creation() {
    let _store = create_test_store();
    // Should not panic - store creation successful
}

#[test]
fn test_get_flavour_existing() {
    let mut store = create_test_store();

    // Row seeded with a flavour
    store
        .conn
        .execute(
            "INSERT INTO players (server, channel, player, flavour, last_roll)
             VALUES (10, 11, 12, 'mage', ?)",
            params![ts("2020-04-01 12:34:56")],
        )
        .unwrap();

    let flavour = store
        .get_flavour(&key(10, 11, 12), ts("2020-05-01 00:00:00"))
        .unwrap();

    assert_eq!(flavour, Some("mage".to_string()));
}

#[test]
fn test_get_flavour_default() {
    let mut store = create_test_store();

    // Row seeded without a flavour
    store
        .conn
        .execute(
            "INSERT INTO players (server, channel, player) VALUES (10, 11, 12)",
            [],
        )
        .unwrap();

    let flavour = store
        .get_flavour(&key(10, 11, 12), ts("2020-05-01 00:00:00"))
        .unwrap();

    assert_eq!(flavour, None);
}

#[test]
fn test_get_flavour_creates_record() {
    let mut store = create_test_store();
    let now = ts("2020-05-01 00:00:00");

    let flavour = store.get_flavour(&key(10, 11, 12), now).unwrap();
    assert_eq!(flavour, None);

    // A row now exists for the triple, with no flavour and the heartbeat set
    let record = store.record(&key(10, 11, 12)).unwrap().unwrap();
    assert_eq!(record.server, ServerId::new(10));
    assert_eq!(record.channel, ChannelId::new(11));
    assert_eq!(record.player, PlayerId::new(12));
    assert_eq!(record.flavour, None);
    assert_eq!(record.last_roll, Some(now));
}

#[test]
fn test_get_flavour_updates_last_roll() {
    let mut store = create_test_store();

    store
        .conn
        .execute(
            "INSERT INTO players (server, channel, player, last_roll) VALUES (10, 11, 12, ?)",
            params![ts("2020-04-01 12:34:56")],
        )
        .unwrap();

    let now = ts("2020-05-01 00:00:00");
    store.get_flavour(&key(10, 11, 12), now).unwrap();

    let record = store.record(&key(10, 11, 12)).unwrap().unwrap();
    assert_eq!(record.last_roll, Some(now));
}

#[test]
fn test_records_isolated_by_triple() {
    let mut store = create_test_store();
    let now = ts("2020-05-01 00:00:00");

    store
        .set_flavour(&key(10, 11, 12), Some("mage"), now)
        .unwrap();

    // Same player in another channel is a different record
    let flavour = store.get_flavour(&key(10, 99, 12), now).unwrap();
    assert_eq!(flavour, None);

    let records = store.all_records().unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_set_flavour_creates_record() {
    let mut store = create_test_store();
    let now = ts("2020-05-01 00:00:00");

    store
        .set_flavour(&key(10, 11, 12), Some("rogue"), now)
        .unwrap();

    let flavour = store.get_flavour(&key(10, 11, 12), now).unwrap();
    assert_eq!(flavour, Some("rogue".to_string()));
}

#[test]
fn test_set_flavour_overwrites() {
    let mut store = create_test_store();
    let now = ts("2020-05-01 00:00:00");

    store
        .set_flavour(&key(10, 11, 12), Some("rogue"), now)
        .unwrap();
    store
        .set_flavour(&key(10, 11, 12), Some("bard"), now)
        .unwrap();

    let flavour = store.get_flavour(&key(10, 11, 12), now).unwrap();
    assert_eq!(flavour, Some("bard".to_string()));

    // Still one row for the triple
    assert_eq!(store.all_records().unwrap().len(), 1);
}

#[test]
fn test_set_flavour_none_clears() {
    let mut store = create_test_store();
    let now = ts("2020-05-01 00:00:00");

    store
        .set_flavour(&key(10, 11, 12), Some("rogue"), now)
        .unwrap();
    store.set_flavour(&key(10, 11, 12), None, now).unwrap();

    let flavour = store.get_flavour(&key(10, 11, 12), now).unwrap();
    assert_eq!(flavour, None);
}

#[test]
fn test_clear_inactive_records() {
    let mut store = create_test_store();

    // Three rows: one stale, one fresh, one just inside the window
    for (player, last_roll) in [
        (12, "2020-04-01 12:34:56"),
        (13, "2020-05-30 12:34:56"),
        (14, "2020-05-01 12:34:56"),
    ] {
        store
            .conn
            .execute(
                "INSERT INTO players (server, channel, player, last_roll) VALUES (10, 11, ?, ?)",
                params![player as u64, ts(last_roll)],
            )
            .unwrap();
    }

    // Cutoff is 2020-05-01 00:00:00; only the April row is older
    let removed = store
        .clear_inactive_records(ts("2020-05-31 00:00:00"))
        .unwrap();
    assert_eq!(removed, 1);

    let records = store.all_records().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].player, PlayerId::new(13));
    assert_eq!(records[0].last_roll, Some(ts("2020-05-30 12:34:56")));
    assert_eq!(records[1].player, PlayerId::new(14));
    assert_eq!(records[1].last_roll, Some(ts("2020-05-01 12:34:56")));
}

#[test]
fn test_clear_inactive_keeps_never_rolled() {
    let mut store = create_test_store();

    // A record with no last_roll never expires
    store
        .conn
        .execute(
            "INSERT INTO players (server, channel, player) VALUES (10, 11, 12)",
            [],
        )
        .unwrap();

    let removed = store
        .clear_inactive_records(ts("2020-05-31 00:00:00"))
        .unwrap();
    assert_eq!(removed, 0);
    assert_eq!(store.all_records().unwrap().len(), 1);
}

#[test]
fn test_clear_inactive_cutoff_is_strict() {
    let mut store = create_test_store();

    // A record exactly at the cutoff is not strictly older, so it stays
    store
        .conn
        .execute(
            "INSERT INTO players (server, channel, player, last_roll) VALUES (10, 11, 12, ?)",
            params![ts("2020-05-01 00:00:00")],
        )
        .unwrap();

    let removed = store
        .clear_inactive_records(ts("2020-05-31 00:00:00"))
        .unwrap();
    assert_eq!(removed, 0);

    // One second older crosses the line
    store
        .conn
        .execute(
            "UPDATE players SET last_roll = ? WHERE player = 12",
            params![ts("2020-04-30 23:59:59")],
        )
        .unwrap();

    let removed = store
        .clear_inactive_records(ts("2020-05-31 00:00:00"))
        .unwrap();
    assert_eq!(removed, 1);
}

#[test]
fn test_record_nonexistent() {
    let store = create_test_store();

    let record = store.record(&key(10, 11, 12)).unwrap();
    assert!(record.is_none());
}
