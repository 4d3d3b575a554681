//! Storage layer for nova
//!
//! A single key-value byte store behind the `StateStore` trait. Progress
//! state is the only tenant today; the trait keeps the state machine
//! independent of the medium.

use std::sync::Arc;

use crate::error::Result;

pub mod sqlite;

pub use sqlite::Database;

/// Namespaced key under which the progress record is stored.
pub const PROGRESS_KEY: &str = "nova-game-progress";

/// Byte-oriented key-value store.
pub trait StateStore {
    /// Fetch the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<S: StateStore + ?Sized> StateStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        (**self).set(key, value)
    }
}
