//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, AppMode, run_tui};
