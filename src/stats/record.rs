//! Aggregate player statistics
//!
//! The record is a plain value: `record_game_end` returns the next record and
//! leaves the current one untouched. Serialized as a flat JSON object with two
//! nested count maps.

use crate::error::StatsError;
use crate::game::{Difficulty, MAX_ATTEMPTS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wins and games played at one difficulty
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyStats {
    pub wins: u32,
    pub total: u32,
}

/// Persisted statistics across all games
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsRecord {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins keyed by the number of guesses they took (1..=6)
    pub guess_distribution: BTreeMap<u8, u32>,
    #[serde(alias = "perDifficultyStats")]
    pub difficulty_stats: BTreeMap<Difficulty, DifficultyStats>,
}

impl Default for StatisticsRecord {
    fn default() -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            max_streak: 0,
            guess_distribution: (1..=MAX_ATTEMPTS as u8).map(|n| (n, 0)).collect(),
            difficulty_stats: Difficulty::ALL
                .into_iter()
                .map(|d| (d, DifficultyStats::default()))
                .collect(),
        }
    }
}

impl StatisticsRecord {
    /// Apply the result of one finished game
    ///
    /// # Panics
    /// Panics if `guesses_used` is outside `1..=MAX_ATTEMPTS`, for wins and
    /// losses alike. A lost game reports `MAX_ATTEMPTS`.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiers::game::Difficulty;
    /// use wordle_tiers::stats::StatisticsRecord;
    ///
    /// let record = StatisticsRecord::default().record_game_end(Difficulty::Medium, true, 3);
    /// assert_eq!(record.games_won, 1);
    /// assert_eq!(record.guess_distribution[&3], 1);
    /// ```
    #[must_use]
    pub fn record_game_end(&self, difficulty: Difficulty, won: bool, guesses_used: usize) -> Self {
        assert!(
            (1..=MAX_ATTEMPTS).contains(&guesses_used),
            "guess count {guesses_used} outside 1..={MAX_ATTEMPTS}"
        );

        let mut next = self.clone();
        next.games_played += 1;
        let tier = next.difficulty_stats.entry(difficulty).or_default();
        tier.total += 1;

        if won {
            tier.wins += 1;
            next.games_won += 1;
            next.current_streak += 1;
            *next
                .guess_distribution
                .entry(guesses_used as u8)
                .or_insert(0) += 1;
            next.max_streak = next.max_streak.max(next.current_streak);
        } else {
            next.current_streak = 0;
        }

        next
    }

    /// Encode as JSON bytes
    #[must_use]
    pub fn serialize(&self) -> Vec<u8> {
        serde_json::to_vec_pretty(self).unwrap_or_default()
    }

    /// Decode JSON bytes, rejecting malformed or contradictory data
    ///
    /// # Errors
    /// Returns `StatsError::Corrupted` if the bytes are not a statistics
    /// object or the counts contradict each other.
    pub fn try_deserialize(bytes: &[u8]) -> Result<Self, StatsError> {
        let mut record: Self =
            serde_json::from_slice(bytes).map_err(|e| StatsError::Corrupted(e.to_string()))?;
        record.validate()?;
        record.fill_missing();
        Ok(record)
    }

    /// Decode stored bytes, falling back to a fresh record
    ///
    /// Absent and corrupted data both yield the all-zero record.
    #[must_use]
    pub fn deserialize(bytes: Option<&[u8]>) -> Self {
        let Some(bytes) = bytes else {
            return Self::default();
        };

        match Self::try_deserialize(bytes) {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}; starting with fresh statistics");
                Self::default()
            }
        }
    }

    /// Win rate as a whole percentage, 0 before any game
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }

    /// Wins that took exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: u8) -> u32 {
        self.guess_distribution.get(&guesses).copied().unwrap_or(0)
    }

    /// Largest distribution bucket, for scaling bars
    #[must_use]
    pub fn most_frequent_guess_count(&self) -> u32 {
        self.guess_distribution.values().copied().max().unwrap_or(0)
    }

    /// Stats for one tier, zero if never played
    #[must_use]
    pub fn difficulty(&self, difficulty: Difficulty) -> DifficultyStats {
        self.difficulty_stats
            .get(&difficulty)
            .copied()
            .unwrap_or_default()
    }

    /// Partial maps from older blobs get their zero entries back
    fn fill_missing(&mut self) {
        for guesses in 1..=MAX_ATTEMPTS as u8 {
            self.guess_distribution.entry(guesses).or_insert(0);
        }
        for difficulty in Difficulty::ALL {
            self.difficulty_stats.entry(difficulty).or_default();
        }
    }

    fn validate(&self) -> Result<(), StatsError> {
        if self.games_won > self.games_played {
            return Err(StatsError::Corrupted(format!(
                "{} wins out of {} games",
                self.games_won, self.games_played
            )));
        }
        if self.current_streak > self.max_streak {
            return Err(StatsError::Corrupted(format!(
                "current streak {} above max streak {}",
                self.current_streak, self.max_streak
            )));
        }
        if let Some(&guesses) = self
            .guess_distribution
            .keys()
            .find(|&&n| !(1..=MAX_ATTEMPTS as u8).contains(&n))
        {
            return Err(StatsError::Corrupted(format!(
                "guess distribution bucket {guesses} outside 1..={MAX_ATTEMPTS}"
            )));
        }
        let distributed: u64 = self.guess_distribution.values().map(|&n| u64::from(n)).sum();
        if distributed != u64::from(self.games_won) {
            return Err(StatsError::Corrupted(format!(
                "guess distribution holds {distributed} wins, expected {}",
                self.games_won
            )));
        }
        if let Some((difficulty, stats)) = self
            .difficulty_stats
            .iter()
            .find(|(_, stats)| stats.wins > stats.total)
        {
            return Err(StatsError::Corrupted(format!(
                "{difficulty}: {} wins out of {} games",
                stats.wins, stats.total
            )));
        }
        // Zero totals are what blobs saved before per-tier tracking carry
        let tier_total: u64 = self
            .difficulty_stats
            .values()
            .map(|s| u64::from(s.total))
            .sum();
        if tier_total != 0 && tier_total != u64::from(self.games_played) {
            return Err(StatsError::Corrupted(format!(
                "tiers hold {tier_total} games, expected {}",
                self.games_played
            )));
        }
        Ok(())
    }
}
