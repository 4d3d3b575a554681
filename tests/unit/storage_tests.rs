//! SQLite store behavior that matters to the tracker: durability across
//! re-opens, shared handles, and row metadata.

use std::sync::Arc;

use nova::core::progress::{ProgressState, ProgressTracker};
use nova::storage::{Database, PROGRESS_KEY, StateStore};
use nova::test_utils::fixed_time;
use tempfile::tempdir;

#[test]
fn tracker_state_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nova.db");

    {
        let tracker = ProgressTracker::new(Database::open(&path).unwrap());
        let first = tracker.load();
        let (state, _) = tracker.record_action(&first, fixed_time(0));
        assert_eq!(state.searches, 1);
    }

    let tracker = ProgressTracker::new(Database::open(&path).unwrap());
    let state = tracker.load();
    assert_eq!(state.searches, 1);
    assert_eq!(state.streak, 1);
    assert_eq!(state.last_action_at, Some(fixed_time(0)));
}

#[test]
fn shared_handle_sees_tracker_writes() {
    let dir = tempdir().unwrap();
    let db = Arc::new(Database::open(dir.path().join("nova.db")).unwrap());
    let tracker = ProgressTracker::new(Arc::clone(&db));

    tracker.record_action(&ProgressState::default(), fixed_time(0));

    let raw = db.get(PROGRESS_KEY).unwrap().expect("record written");
    let stored: ProgressState = serde_json::from_slice(&raw).unwrap();
    assert_eq!(stored.searches, 1);
}

#[test]
fn upsert_refreshes_updated_at() {
    let dir = tempdir().unwrap();
    let db = Database::open(dir.path().join("nova.db")).unwrap();

    db.set("k", b"v1").unwrap();
    let first: String = db
        .conn()
        .query_row("SELECT updated_at FROM kv_state WHERE key = 'k'", [], |r| {
            r.get(0)
        })
        .unwrap();

    db.set("k", b"v2").unwrap();
    let rows: i64 = db
        .conn()
        .query_row("SELECT COUNT(*) FROM kv_state", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 1, "upsert must not duplicate the key");

    // RFC 3339 strings order chronologically.
    let second: String = db
        .conn()
        .query_row("SELECT updated_at FROM kv_state WHERE key = 'k'", [], |r| {
            r.get(0)
        })
        .unwrap();
    assert!(second >= first);
}

#[test]
fn keys_are_independent() {
    let dir = tempdir().unwrap();
    let db = Database::open(dir.path().join("nova.db")).unwrap();

    db.set("a", b"alpha").unwrap();
    db.set("b", b"beta").unwrap();
    db.set("a", b"alpha2").unwrap();

    assert_eq!(db.get("a").unwrap(), Some(b"alpha2".to_vec()));
    assert_eq!(db.get("b").unwrap(), Some(b"beta".to_vec()));
}

#[test]
fn binary_values_roundtrip_exactly() {
    let dir = tempdir().unwrap();
    let db = Database::open(dir.path().join("nova.db")).unwrap();

    let value: Vec<u8> = (0..=255).collect();
    db.set("bin", &value).unwrap();
    assert_eq!(db.get("bin").unwrap(), Some(value));
}
