//! Game flow: difficulty tiers, session state and the render interface
//!
//! The session replaces shared mutable game globals with one value the
//! front-end owns and passes around.

mod difficulty;
mod session;

pub use difficulty::Difficulty;
pub use session::{Attempt, GameOutcome, GameSession, GameStatus, SubmitOutcome};

use crate::core::{Feedback, KeyboardStatus, Word};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// One-way notifications from the game to a presentation layer
///
/// The game makes no assumptions about what rendering does with them.
pub trait GameView {
    /// A guess was accepted and evaluated
    fn render_feedback(&mut self, guess: &Word, feedback: &Feedback);

    /// Keyboard status after the latest guess
    fn render_keyboard(&mut self, keyboard: &KeyboardStatus);
}
