//! Progress state machine: searches, daily streaks, levels, badges
//!
//! `ProgressState::record` is a pure transition; `ProgressTracker` wraps it
//! with the persistence adapter. Persistence failures never fail a session:
//! reads fall back to defaults, writes degrade to in-memory state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::storage::{PROGRESS_KEY, StateStore};

/// Minimum gap between actions for the daily streak to advance (24 hours).
pub const STREAK_THRESHOLD_SECS: i64 = 86_400;

/// Recorded actions per level.
pub const SEARCHES_PER_LEVEL: u64 = 5;

/// Search-count milestones that each award one badge, ascending.
pub const BADGE_MILESTONES: [u64; 5] = [5, 10, 25, 50, 100];

fn default_level() -> u32 {
    1
}

/// The persisted gamification record. One per user, one per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Derived from `searches`; stored for display, re-derived on load.
    #[serde(default = "default_level")]
    pub level: u32,
    /// Total successfully recorded actions.
    #[serde(default)]
    pub searches: u64,
    /// Consecutive active days. Grows only, never resets on missed days.
    #[serde(default)]
    pub streak: u32,
    /// Milestone badges earned.
    #[serde(default)]
    pub badges: u32,
    /// Timestamp of the last recorded action.
    #[serde(default)]
    pub last_action_at: Option<DateTime<Utc>>,
}

impl Default for ProgressState {
    fn default() -> Self {
        Self {
            level: 1,
            searches: 0,
            streak: 0,
            badges: 0,
            last_action_at: None,
        }
    }
}

/// Notable transitions produced by recording an action. Ordered as emitted:
/// streak, then level, then badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProgressEvent {
    StreakIncreased { streak: u32 },
    LeveledUp { level: u32 },
    BadgeEarned { milestone: u64 },
    ProgressReset,
}

impl ProgressState {
    /// Level implied by a search count: one level per five searches,
    /// starting at 1.
    pub fn level_for(searches: u64) -> u32 {
        u32::try_from(searches / SEARCHES_PER_LEVEL + 1).unwrap_or(u32::MAX)
    }

    /// Apply one recorded action at `now`. Pure: returns the next state and
    /// the events the transition produced, in emission order.
    pub fn record(&self, now: DateTime<Utc>) -> (Self, Vec<ProgressEvent>) {
        let mut next = self.clone();
        let mut events = Vec::new();

        // Streak first: 1 on the very first action (silent), +1 when at
        // least 24 hours have passed, otherwise unchanged.
        match self.last_action_at {
            None => next.streak = 1,
            Some(last) => {
                let gap = now.signed_duration_since(last).num_seconds();
                if gap >= STREAK_THRESHOLD_SECS {
                    next.streak = self.streak + 1;
                    events.push(ProgressEvent::StreakIncreased {
                        streak: next.streak,
                    });
                }
            }
        }

        next.searches = self.searches + 1;

        next.level = Self::level_for(next.searches);
        if next.level > self.level {
            events.push(ProgressEvent::LeveledUp { level: next.level });
        }

        // Milestones are checked independently so a jump across several
        // thresholds awards every badge in between.
        for milestone in crossed_milestones(self.searches, next.searches) {
            next.badges += 1;
            events.push(ProgressEvent::BadgeEarned { milestone });
        }

        next.last_action_at = Some(now);
        (next, events)
    }

    /// Searches counted toward the next level (0..SEARCHES_PER_LEVEL).
    pub fn searches_into_level(&self) -> u64 {
        self.searches % SEARCHES_PER_LEVEL
    }

    /// Total searches at which the next level is reached.
    pub fn next_level_at(&self) -> u64 {
        (self.searches / SEARCHES_PER_LEVEL + 1) * SEARCHES_PER_LEVEL
    }

    /// The next unearned badge milestone, if any remain.
    pub fn next_badge_at(&self) -> Option<u64> {
        BADGE_MILESTONES.into_iter().find(|&m| self.searches < m)
    }

    /// Milestones already reached, ascending.
    pub fn earned_milestones(&self) -> Vec<u64> {
        BADGE_MILESTONES
            .into_iter()
            .filter(|&m| self.searches >= m)
            .collect()
    }
}

/// Badge milestones crossed by moving from `prev` to `next` searches.
pub fn crossed_milestones(prev: u64, next: u64) -> Vec<u64> {
    BADGE_MILESTONES
        .into_iter()
        .filter(|&m| prev < m && m <= next)
        .collect()
}

/// Persistence wrapper around the pure state machine.
///
/// Every operation is infallible from the caller's point of view: storage
/// problems are logged and absorbed per the session-continuity contract.
pub struct ProgressTracker<S> {
    store: S,
}

impl<S: StateStore> ProgressTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted state. Absent or corrupt records yield the
    /// default state; a drifted `level` field is re-derived from
    /// `searches`.
    pub fn load(&self) -> ProgressState {
        let raw = match self.store.get(PROGRESS_KEY) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return ProgressState::default(),
            Err(err) => {
                warn!("failed to read progress state, starting fresh: {err}");
                return ProgressState::default();
            }
        };

        match serde_json::from_slice::<ProgressState>(&raw) {
            Ok(mut state) => {
                let derived = ProgressState::level_for(state.searches);
                if state.level != derived {
                    debug!(
                        "stored level {} disagrees with {} searches, using level {}",
                        state.level, state.searches, derived
                    );
                    state.level = derived;
                }
                state
            }
            Err(err) => {
                warn!("stored progress is corrupt, starting fresh: {err}");
                ProgressState::default()
            }
        }
    }

    /// Record one action and persist the result. The advanced state is
    /// returned even if the write fails.
    pub fn record_action(
        &self,
        current: &ProgressState,
        now: DateTime<Utc>,
    ) -> (ProgressState, Vec<ProgressEvent>) {
        let (next, events) = current.record(now);
        self.persist(&next);
        (next, events)
    }

    /// Replace the persisted state with defaults.
    pub fn reset(&self) -> (ProgressState, Vec<ProgressEvent>) {
        let state = ProgressState::default();
        self.persist(&state);
        (state, vec![ProgressEvent::ProgressReset])
    }

    fn persist(&self, state: &ProgressState) {
        let bytes = match serde_json::to_vec(state) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("failed to serialize progress state: {err}");
                return;
            }
        };
        if let Err(err) = self.store.set(PROGRESS_KEY, &bytes) {
            warn!("failed to persist progress state: {err}");
        }
    }
}
