//! Player statistics
//!
//! [`StatisticsRecord`] is the pure aggregate, [`StatsStore`] the persistence
//! capability and [`StatisticsTracker`] ties the two together.

mod record;
mod store;
mod tracker;

pub use record::{DifficultyStats, StatisticsRecord};
pub use store::{FileStatsStore, MemoryStatsStore, STATS_FILE_NAME, StatsStore};
pub use tracker::StatisticsTracker;
