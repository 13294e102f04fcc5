//! Statistics tracker
//!
//! Owns the in-memory record and writes it through to a [`StatsStore`] after
//! every change. The in-memory record stays authoritative for the session even
//! when a write fails.

use super::{StatisticsRecord, StatsStore};
use crate::error::StatsError;
use crate::game::{Difficulty, GameOutcome};

pub struct StatisticsTracker<S: StatsStore> {
    store: S,
    record: StatisticsRecord,
}

impl<S: StatsStore> StatisticsTracker<S> {
    /// Load the stored record, or start fresh if it is absent or unreadable
    pub fn load(store: S) -> Self {
        let record = match store.load() {
            Ok(bytes) => StatisticsRecord::deserialize(bytes.as_deref()),
            Err(e) => {
                log::warn!("Failed to read statistics ({e}); starting with fresh statistics");
                StatisticsRecord::default()
            }
        };
        Self { store, record }
    }

    #[must_use]
    pub const fn record(&self) -> &StatisticsRecord {
        &self.record
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Apply a finished game and persist the new record
    ///
    /// # Errors
    /// Returns `StatsError::Persist` if the store rejects the write. The
    /// in-memory record is updated either way.
    ///
    /// # Panics
    /// Panics if `guesses_used` is outside `1..=MAX_ATTEMPTS`.
    pub fn record_game_end(
        &mut self,
        difficulty: Difficulty,
        won: bool,
        guesses_used: usize,
    ) -> Result<&StatisticsRecord, StatsError> {
        self.record = self.record.record_game_end(difficulty, won, guesses_used);
        self.persist()?;
        Ok(&self.record)
    }

    /// Record the outcome reported by a finished session
    ///
    /// # Errors
    /// Same as [`StatisticsTracker::record_game_end`].
    pub fn record_outcome(
        &mut self,
        outcome: GameOutcome,
    ) -> Result<&StatisticsRecord, StatsError> {
        self.record_game_end(outcome.difficulty, outcome.won, outcome.guesses_used)
    }

    /// Zero the statistics and persist
    ///
    /// # Errors
    /// Returns `StatsError::Persist` if the store rejects the write.
    pub fn reset(&mut self) -> Result<(), StatsError> {
        self.record = StatisticsRecord::default();
        self.persist()
    }

    fn persist(&self) -> Result<(), StatsError> {
        self.store.save(&self.record.serialize()).map_err(|e| {
            log::warn!("Failed to save statistics: {e}");
            StatsError::Persist(e)
        })
    }
}
