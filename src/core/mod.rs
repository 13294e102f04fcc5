//! Core domain types for Wordle
//!
//! Words, per-guess feedback and keyboard status. Everything here is pure:
//! no I/O, no randomness, no shared state.

mod feedback;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterFeedback, evaluate};
pub use keyboard::{KeyStatus, KeyboardStatus, aggregate_keyboard_status};
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
