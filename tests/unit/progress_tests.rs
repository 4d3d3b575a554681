//! Tracker-level tests: the progress state machine wired to real and
//! misbehaving stores. Pure transition coverage lives with the state
//! machine itself.

use nova::core::progress::{ProgressEvent, ProgressState, ProgressTracker};
use nova::storage::PROGRESS_KEY;
use nova::test_utils::{FailingStore, MemoryStore, TestCase, fixed_time, run_table_tests};

const DAY: i64 = 86_400;

#[test]
fn level_formula_table() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "no searches",
            input: 0u64,
            expected: 1u32,
            should_panic: false,
        },
        TestCase {
            name: "just below the boundary",
            input: 4,
            expected: 1,
            should_panic: false,
        },
        TestCase {
            name: "boundary search",
            input: 5,
            expected: 2,
            should_panic: false,
        },
        TestCase {
            name: "mid ladder",
            input: 23,
            expected: 5,
            should_panic: false,
        },
        TestCase {
            name: "hundredth search",
            input: 100,
            expected: 21,
            should_panic: false,
        },
    ];
    run_table_tests(cases, ProgressState::level_for)
}

#[test]
fn record_persists_reloadable_state() {
    let tracker = ProgressTracker::new(MemoryStore::new());

    let (first, _) = tracker.record_action(&tracker.load(), fixed_time(0));
    let (second, _) = tracker.record_action(&first, fixed_time(60));

    assert_eq!(second.searches, 2);
    assert_eq!(tracker.load(), second);
}

#[test]
fn stored_record_uses_stable_field_names() {
    let store = MemoryStore::new();
    let tracker = ProgressTracker::new(&store);
    tracker.record_action(&ProgressState::default(), fixed_time(0));

    let raw = store.raw(PROGRESS_KEY).expect("record written");
    let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    let keys = value.as_object().unwrap();
    for key in ["level", "searches", "streak", "badges", "last_action_at"] {
        assert!(keys.contains_key(key), "missing field {key}");
    }
}

#[test]
fn partial_record_fills_missing_fields_with_defaults() {
    let store = MemoryStore::new();
    store.plant(PROGRESS_KEY, br#"{"searches": 7}"#);

    let state = ProgressTracker::new(&store).load();
    assert_eq!(state.searches, 7);
    assert_eq!(state.streak, 0);
    assert_eq!(state.badges, 0);
    // Absent level is derived, not defaulted to 1.
    assert_eq!(state.level, 2);
    assert_eq!(state.last_action_at, None);
}

#[test]
fn drifted_level_is_rederived_on_load() {
    let store = MemoryStore::new();
    store.plant(PROGRESS_KEY, br#"{"level": 1, "searches": 10}"#);

    let state = ProgressTracker::new(&store).load();
    assert_eq!(state.level, 3);
}

#[test]
fn corrupt_record_yields_default_state() {
    let store = MemoryStore::new();
    store.plant(PROGRESS_KEY, b"definitely not json");

    let state = ProgressTracker::new(&store).load();
    assert_eq!(state, ProgressState::default());
}

#[test]
fn successful_write_repairs_a_corrupt_record() {
    let store = MemoryStore::new();
    store.plant(PROGRESS_KEY, b"definitely not json");
    let tracker = ProgressTracker::new(&store);

    let (next, _) = tracker.record_action(&tracker.load(), fixed_time(0));
    assert_eq!(next.searches, 1);

    let raw = store.raw(PROGRESS_KEY).expect("record rewritten");
    let repaired: ProgressState = serde_json::from_slice(&raw).expect("parseable again");
    assert_eq!(repaired, next);
}

#[test]
fn write_failure_still_advances_session_state() {
    let store = FailingStore::new();
    let tracker = ProgressTracker::new(&store);

    let (next, events) = tracker.record_action(&ProgressState::default(), fixed_time(0));
    assert_eq!(next.searches, 1);
    assert_eq!(next.streak, 1);
    assert!(events.is_empty(), "first action is silent");

    // Nothing reached the store, so a fresh load starts over.
    assert_eq!(tracker.load(), ProgressState::default());
}

#[test]
fn streak_advances_across_a_tracker_round_trip() {
    let tracker = ProgressTracker::new(MemoryStore::new());

    tracker.record_action(&tracker.load(), fixed_time(0));
    let (state, events) = tracker.record_action(&tracker.load(), fixed_time(DAY));

    assert_eq!(state.streak, 2);
    assert!(
        events.contains(&ProgressEvent::StreakIncreased { streak: 2 }),
        "expected a streak event, got {events:?}"
    );
}

#[test]
fn reset_persists_defaults_and_reports_it() {
    let store = MemoryStore::new();
    let tracker = ProgressTracker::new(&store);
    tracker.record_action(&ProgressState::default(), fixed_time(0));

    let (state, events) = tracker.reset();
    assert_eq!(state, ProgressState::default());
    assert_eq!(events, vec![ProgressEvent::ProgressReset]);
    assert_eq!(tracker.load(), ProgressState::default());
}
