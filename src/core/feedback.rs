//! Guess feedback calculation and representation
//!
//! Each position of a guess is classified relative to the target:
//! - `Absent` (gray): letter not available in the target
//! - `Present` (yellow): letter in the target, wrong position
//! - `Correct` (green): letter in the correct position

use super::Word;
use std::fmt;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Absent,
    Present,
    Correct,
}

impl LetterFeedback {
    /// Emoji tile for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

}

/// Ordered per-position feedback for one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterFeedback>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters:
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass: mark present letters while the pool still holds them
    ///
    /// # Panics
    /// Panics if the words differ in length. Callers validate length first.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiers::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("grand").unwrap();
    /// let target = Word::new("mango").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.as_slice(), &[Present, Absent, Present, Present, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let mut result = vec![LetterFeedback::Absent; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterFeedback::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters from what is left
        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == LetterFeedback::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&letter)
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position feedback
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LetterFeedback] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == LetterFeedback::Correct)
    }

    /// Count the number of correct (green) positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Correct)
            .count()
    }

    /// Count the number of present (yellow) positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&f| f == LetterFeedback::Present)
            .count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Evaluate `guess` against `target`
///
/// Shorthand for [`Feedback::calculate`].
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::calculate(guess, target)
}
