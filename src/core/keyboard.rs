//! Keyboard letter status across a session
//!
//! Tracks the best feedback ever observed for each letter. Status only moves
//! up the ranking `Unseen < Absent < Present < Correct`.

use super::{Feedback, LetterFeedback, Word, evaluate};

const ALPHABET_LEN: usize = 26;

/// Best known status of a single keyboard letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyStatus {
    #[default]
    Unseen,
    Absent,
    Present,
    Correct,
}

impl From<LetterFeedback> for KeyStatus {
    fn from(feedback: LetterFeedback) -> Self {
        match feedback {
            LetterFeedback::Absent => Self::Absent,
            LetterFeedback::Present => Self::Present,
            LetterFeedback::Correct => Self::Correct,
        }
    }
}

/// Per-letter status for `a..=z`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyboardStatus {
    keys: [KeyStatus; ALPHABET_LEN],
}

impl KeyboardStatus {
    /// All letters unseen
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one evaluated guess into the status
    ///
    /// Each letter is upgraded to the better of its current status and the
    /// feedback it just received; nothing is ever downgraded.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        debug_assert_eq!(guess.len(), feedback.len());

        for (&letter, letter_feedback) in guess.chars().iter().zip(feedback.iter()) {
            let Some(slot) = self.slot_mut(letter) else {
                continue;
            };
            *slot = (*slot).max(KeyStatus::from(letter_feedback));
        }
    }

    /// Status of a letter; non-letters are always `Unseen`
    #[must_use]
    pub fn get(&self, letter: u8) -> KeyStatus {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.keys[usize::from(letter - b'a')]
        } else {
            KeyStatus::Unseen
        }
    }

    /// Iterate `(letter, status)` in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (char, KeyStatus)> + '_ {
        (b'a'..=b'z')
            .zip(self.keys.iter())
            .map(|(letter, &status)| (char::from(letter), status))
    }

    fn slot_mut(&mut self, letter: u8) -> Option<&mut KeyStatus> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            Some(&mut self.keys[usize::from(letter - b'a')])
        } else {
            None
        }
    }
}

/// Replay every guess of a session, in order, against the target
///
/// # Examples
/// ```
/// use wordle_tiers::core::{KeyStatus, Word, aggregate_keyboard_status};
///
/// let target = Word::new("mango").unwrap();
/// let guesses = [Word::new("grand").unwrap(), Word::new("mango").unwrap()];
/// let keyboard = aggregate_keyboard_status(&guesses, &target);
///
/// assert_eq!(keyboard.get(b'g'), KeyStatus::Correct);
/// assert_eq!(keyboard.get(b'r'), KeyStatus::Absent);
/// assert_eq!(keyboard.get(b'z'), KeyStatus::Unseen);
/// ```
///
/// # Panics
/// Panics if a guess differs in length from the target.
#[must_use]
pub fn aggregate_keyboard_status(guesses: &[Word], target: &Word) -> KeyboardStatus {
    guesses
        .iter()
        .fold(KeyboardStatus::new(), |mut keyboard, guess| {
            keyboard.record(guess, &evaluate(guess, target));
            keyboard
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn empty_history_is_all_unseen() {
        let target = Word::new("crane").unwrap();
        let keyboard = aggregate_keyboard_status(&[], &target);
        assert!(keyboard.iter().all(|(_, s)| s == KeyStatus::Unseen));
        assert_eq!(keyboard.iter().count(), 26);
    }

    #[test]
    fn status_ranking() {
        assert!(KeyStatus::Unseen < KeyStatus::Absent);
        assert!(KeyStatus::Absent < KeyStatus::Present);
        assert!(KeyStatus::Present < KeyStatus::Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let target = Word::new("mango").unwrap();
        let history = words(&["grand", "mango"]);

        let after_first = aggregate_keyboard_status(&history[..1], &target);
        assert_eq!(after_first.get(b'g'), KeyStatus::Present);
        assert_eq!(after_first.get(b'a'), KeyStatus::Present);

        let after_both = aggregate_keyboard_status(&history, &target);
        assert_eq!(after_both.get(b'g'), KeyStatus::Correct);
        assert_eq!(after_both.get(b'a'), KeyStatus::Correct);
        assert_eq!(after_both.get(b'd'), KeyStatus::Absent);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let target = Word::new("crane").unwrap();
        // "crane" pins every letter, later guesses use them in wrong places
        let history = words(&["crane", "nacre", "caner"]);
        let keyboard = aggregate_keyboard_status(&history, &target);

        for letter in b"crane" {
            assert_eq!(keyboard.get(*letter), KeyStatus::Correct);
        }
    }

    #[test]
    fn duplicate_in_guess_keeps_best_status() {
        // Second L is green, first L absent: key shows green
        let target = Word::new("plant").unwrap();
        let keyboard = aggregate_keyboard_status(&words(&["llama"]), &target);
        assert_eq!(keyboard.get(b'l'), KeyStatus::Correct);
        assert_eq!(keyboard.get(b'm'), KeyStatus::Absent);
    }

    #[test]
    fn replay_is_idempotent_and_prefix_composable() {
        let target = Word::new("speed").unwrap();
        let history = words(&["erase", "spend", "steed", "speed"]);

        let whole = aggregate_keyboard_status(&history, &target);
        assert_eq!(whole, aggregate_keyboard_status(&history, &target));

        for split in 0..=history.len() {
            let mut keyboard = aggregate_keyboard_status(&history[..split], &target);
            for guess in &history[split..] {
                keyboard.record(guess, &evaluate(guess, &target));
            }
            assert_eq!(keyboard, whole, "split at {split}");
        }
    }

    #[test]
    fn get_is_case_insensitive_and_ignores_non_letters() {
        let target = Word::new("cat").unwrap();
        let keyboard = aggregate_keyboard_status(&words(&["cat"]), &target);
        assert_eq!(keyboard.get(b'C'), KeyStatus::Correct);
        assert_eq!(keyboard.get(b'1'), KeyStatus::Unseen);
    }
}
