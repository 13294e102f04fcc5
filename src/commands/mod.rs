//! Command implementations

pub mod check;
pub mod simple;
pub mod stats;

pub use check::{CheckResult, check_words};
pub use simple::run_simple;
pub use stats::run_stats;
