//! Feedback check command
//!
//! Evaluates a single guess against a chosen target, outside of any game.

use crate::core::{Feedback, Word, evaluate};
use crate::error::GameError;

/// Result of checking a guess against a target
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn check_words(guess: &str, target: &str) -> Result<CheckResult, GameError> {
    let guess = Word::new(guess)?;
    let target = Word::new(target)?;

    if guess.len() != target.len() {
        return Err(GameError::InvalidGuessLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let feedback = evaluate(&guess, &target);
    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_feedback() {
        let result = check_words("ERASE", "speed").unwrap();
        assert_eq!(result.guess.text(), "erase");
        assert_eq!(result.feedback.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn check_rejects_length_mismatch() {
        assert!(matches!(
            check_words("cat", "mango"),
            Err(GameError::InvalidGuessLength {
                expected: 5,
                actual: 3
            })
        ));
    }

    #[test]
    fn check_rejects_malformed_words() {
        assert!(matches!(
            check_words("c4t", "cat"),
            Err(GameError::InvalidWord(_))
        ));
    }
}
