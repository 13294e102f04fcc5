//! Terminal output formatting
//!
//! Colored feedback rows, keyboard and statistics for the CLI.

pub mod display;
pub mod formatters;

pub use display::{TerminalView, print_check_result, print_statistics};
