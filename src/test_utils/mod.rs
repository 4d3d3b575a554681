//! Shared test utilities for nova.
//!
//! The stores here stand in for the SQLite database so the progress
//! tracker's behavior (including its persistence-failure tolerance) can be
//! exercised hermetically.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::error::{NovaError, Result};
use crate::storage::StateStore;

/// In-memory key-value store.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant raw bytes directly, bypassing the tracker. Used to simulate
    /// corrupt or hand-edited records.
    pub fn plant(&self, key: &str, value: &[u8]) {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .insert(key.to_string(), value.to_vec());
    }

    /// Raw bytes currently stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.entries
            .lock()
            .expect("store lock poisoned")
            .get(key)
            .cloned()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.plant(key, value);
        Ok(())
    }
}

/// Store whose writes always fail. Reads delegate to an inner
/// [`MemoryStore`], so a pre-planted record is still loadable.
#[derive(Default)]
pub struct FailingStore {
    pub inner: MemoryStore,
}

impl FailingStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.inner.get(key)
    }

    fn set(&self, _key: &str, _value: &[u8]) -> Result<()> {
        Err(NovaError::Io(std::io::Error::other(
            "injected write failure",
        )))
    }
}

/// Deterministic instant for streak tests: a fixed anchor plus an offset.
#[must_use]
pub fn fixed_time(offset_secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + offset_secs, 0)
        .single()
        .expect("valid timestamp")
}

/// Table-driven test case.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
    pub should_panic: bool,
}

/// Run table-driven cases, reporting the first failure by name.
pub fn run_table_tests<I, E, F>(
    cases: Vec<TestCase<I, E>>,
    test_fn: F,
) -> std::result::Result<(), String>
where
    I: std::fmt::Debug + Clone + std::panic::RefUnwindSafe,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    for case in cases {
        let outcome = std::panic::catch_unwind(|| test_fn(case.input.clone()));
        match (case.should_panic, outcome) {
            (true, Err(_)) => {}
            (true, Ok(actual)) => {
                return Err(format!(
                    "case '{}' expected a panic, got {actual:?}",
                    case.name
                ));
            }
            (false, Err(_)) => return Err(format!("case '{}' panicked", case.name)),
            (false, Ok(actual)) => {
                if actual != case.expected {
                    return Err(format!(
                        "case '{}': expected {:?}, got {actual:?}",
                        case.name, case.expected
                    ));
                }
            }
        }
    }
    Ok(())
}
