//! Wordle Tiers
//!
//! Terminal Wordle with easy, medium and hard tiers, word lengths from 3 to 9
//! letters, keyboard hints and statistics persisted between runs.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_tiers::core::{Word, evaluate};
//!
//! let guess = Word::new("erase").unwrap();
//! let target = Word::new("speed").unwrap();
//!
//! let feedback = evaluate(&guess, &target);
//! println!("{}", feedback.to_emoji()); // 🟨⬜⬜🟨🟨
//! ```

// Core domain types
pub mod core;

// Game rules and sessions
pub mod game;

// Error types
pub mod error;

// Word lists
pub mod wordlists;

// Persisted statistics
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
