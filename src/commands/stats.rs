//! Statistics command

use crate::output::print_statistics;
use crate::stats::{StatisticsTracker, StatsStore};
use anyhow::Result;

/// Print the stored statistics, optionally zeroing them first
///
/// # Errors
///
/// Returns an error if a reset could not be persisted.
pub fn run_stats<S: StatsStore>(tracker: &mut StatisticsTracker<S>, reset: bool) -> Result<()> {
    if reset {
        tracker.reset()?;
        println!("Statistics reset.");
    }
    print_statistics(tracker.record());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Difficulty;
    use crate::stats::{MemoryStatsStore, StatisticsRecord};

    #[test]
    fn reset_clears_stored_record() {
        let mut tracker = StatisticsTracker::load(MemoryStatsStore::new());
        tracker.record_game_end(Difficulty::Easy, true, 3).unwrap();

        run_stats(&mut tracker, true).unwrap();
        assert_eq!(tracker.record(), &StatisticsRecord::default());
    }

    #[test]
    fn reset_failure_is_reported() {
        let store = MemoryStatsStore::new();
        store.set_fail_saves(true);
        let mut tracker = StatisticsTracker::load(store);
        assert!(run_stats(&mut tracker, true).is_err());
    }

    #[test]
    fn plain_view_leaves_record() {
        let mut tracker = StatisticsTracker::load(MemoryStatsStore::new());
        tracker.record_game_end(Difficulty::Hard, false, 6).unwrap();
        run_stats(&mut tracker, false).unwrap();
        assert_eq!(tracker.record().games_played, 1);
    }
}
