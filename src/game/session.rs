//! Game session state
//!
//! A `GameSession` is the whole state of one game: target, submitted
//! attempts, the partial guess being typed and the keyboard status.
//! Front-ends own it and drive it one input event at a time.

use super::{Difficulty, GameView, MAX_ATTEMPTS};
use crate::core::{Feedback, KeyboardStatus, Word, evaluate};
use crate::error::GameError;
use crate::wordlists::{Dictionary, WordSource};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// One submitted guess with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
}

/// Summary of a finished game, handed to the statistics tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub difficulty: Difficulty,
    pub won: bool,
    pub guesses_used: usize,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    difficulty: Difficulty,
    target: Word,
    attempts: Vec<Attempt>,
    current: String,
    keyboard: KeyboardStatus,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with a known target
    #[must_use]
    pub fn new(difficulty: Difficulty, target: Word) -> Self {
        Self {
            difficulty,
            target,
            attempts: Vec::new(),
            current: String::new(),
            keyboard: KeyboardStatus::new(),
            status: GameStatus::Playing,
        }
    }

    /// Start a game with a random word length and target for the tier
    ///
    /// Returns the session together with the dictionary guesses are checked
    /// against.
    ///
    /// # Errors
    /// Returns an error if the source has no lengths or no words for the
    /// chosen length, or fails to read.
    pub fn start<S, R>(
        difficulty: Difficulty,
        source: &S,
        rng: &mut R,
    ) -> Result<(Self, Dictionary), GameError>
    where
        S: WordSource + ?Sized,
        R: Rng + ?Sized,
    {
        let lengths = source.lengths(difficulty)?;
        let &length = lengths
            .choose(rng)
            .ok_or(GameError::NoWordLengths(difficulty))?;

        let dictionary = Dictionary::load(source, difficulty, length)?;
        let target = dictionary
            .pick_target(rng)
            .cloned()
            .ok_or(GameError::EmptyWordList { difficulty, length })?;

        log::debug!("new {difficulty} game, {length} letters, target word: {target}");

        Ok((Self::new(difficulty, target), dictionary))
    }

    /// Append a letter to the partial guess
    ///
    /// Returns false when the letter was ignored: game over, not an ASCII
    /// letter, or the guess is already full.
    pub fn push_letter(&mut self, letter: char) -> bool {
        if !self.is_playing()
            || !letter.is_ascii_alphabetic()
            || self.current.len() >= self.target.len()
        {
            return false;
        }
        self.current.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last letter of the partial guess
    pub fn pop_letter(&mut self) -> Option<char> {
        if !self.is_playing() {
            return None;
        }
        self.current.pop()
    }

    /// Submit the partial guess
    ///
    /// On error nothing changes and no attempt is consumed.
    ///
    /// # Errors
    /// - `GameOver` if the game has ended
    /// - `InvalidGuessLength` if the guess is not as long as the target
    /// - `NotInDictionary` if the guess is not an accepted word
    pub fn submit(&mut self, dictionary: &Dictionary) -> Result<SubmitOutcome, GameError> {
        if !self.is_playing() {
            return Err(GameError::GameOver);
        }

        if self.current.len() != self.target.len() {
            return Err(GameError::InvalidGuessLength {
                expected: self.target.len(),
                actual: self.current.len(),
            });
        }

        let guess = Word::new(self.current.as_str())?;
        if !dictionary.contains(&guess) {
            return Err(GameError::NotInDictionary(guess.text().to_string()));
        }

        let feedback = evaluate(&guess, &self.target);
        self.keyboard.record(&guess, &feedback);
        log::debug!("guess {guess} -> {feedback}");
        self.attempts.push(Attempt {
            guess,
            feedback: feedback.clone(),
        });
        self.current.clear();

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.status = GameStatus::Lost;
        }

        if self.is_over() {
            log::info!(
                "{} game over: {:?} after {} guesses",
                self.difficulty,
                self.status,
                self.attempts.len()
            );
        }

        Ok(SubmitOutcome {
            feedback,
            status: self.status,
        })
    }

    /// Replace the partial guess with `text`, submit it and notify `view`
    ///
    /// Used by line-oriented front-ends. The partial guess is restored if
    /// the submission is rejected.
    ///
    /// # Errors
    /// Same as [`GameSession::submit`].
    pub fn submit_word<V: GameView + ?Sized>(
        &mut self,
        text: &str,
        dictionary: &Dictionary,
        view: &mut V,
    ) -> Result<SubmitOutcome, GameError> {
        if !self.is_playing() {
            return Err(GameError::GameOver);
        }

        let previous = std::mem::replace(&mut self.current, text.trim().to_lowercase());
        let result = self.submit_and_render(dictionary, view);
        if result.is_err() {
            self.current = previous;
        }
        result
    }

    /// Submit and notify a view of the new feedback row and keyboard
    ///
    /// # Errors
    /// Same as [`GameSession::submit`]; the view is only notified on success.
    pub fn submit_and_render<V: GameView + ?Sized>(
        &mut self,
        dictionary: &Dictionary,
        view: &mut V,
    ) -> Result<SubmitOutcome, GameError> {
        let outcome = self.submit(dictionary)?;
        if let Some(last) = self.attempts.last() {
            view.render_feedback(&last.guess, &last.feedback);
        }
        view.render_keyboard(&self.keyboard);
        Ok(outcome)
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Guesses submitted so far, in order
    pub fn guesses(&self) -> impl Iterator<Item = &Word> {
        self.attempts.iter().map(|a| &a.guess)
    }

    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardStatus {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        !self.is_playing()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.attempts.len())
    }

    /// Outcome to record, once the game has ended
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won | GameStatus::Lost => Some(GameOutcome {
                difficulty: self.difficulty,
                won: self.status == GameStatus::Won,
                guesses_used: self.attempts.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeyStatus, LetterFeedback, aggregate_keyboard_status};
    use crate::wordlists::EmbeddedWords;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn mango_game() -> (GameSession, Dictionary) {
        let dictionary = Dictionary::new(words_from_slice(&[
            "mango", "grand", "crane", "slate", "plant", "tiger", "water",
        ]));
        let session = GameSession::new(Difficulty::Easy, Word::new("mango").unwrap());
        (session, dictionary)
    }

    fn type_word(session: &mut GameSession, word: &str) {
        for c in word.chars() {
            session.push_letter(c);
        }
    }

    fn play(
        session: &mut GameSession,
        word: &str,
        dictionary: &Dictionary,
    ) -> Result<SubmitOutcome, GameError> {
        session.submit_word(word, dictionary, &mut RecordingView::default())
    }

    #[derive(Default)]
    struct RecordingView {
        rows: Vec<(String, Feedback)>,
        keyboards: usize,
    }

    impl GameView for RecordingView {
        fn render_feedback(&mut self, guess: &Word, feedback: &Feedback) {
            self.rows.push((guess.text().to_string(), feedback.clone()));
        }

        fn render_keyboard(&mut self, _keyboard: &KeyboardStatus) {
            self.keyboards += 1;
        }
    }

    #[test]
    fn typing_respects_word_length() {
        let (mut session, _) = mango_game();
        type_word(&mut session, "GRANDS");
        assert_eq!(session.current_guess(), "grand");

        assert!(!session.push_letter('1'));
        assert_eq!(session.pop_letter(), Some('d'));
        assert_eq!(session.current_guess(), "gran");
    }

    #[test]
    fn short_guess_rejected_without_consuming_attempt() {
        let (mut session, dictionary) = mango_game();
        type_word(&mut session, "gran");

        let err = session.submit(&dictionary).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidGuessLength {
                expected: 5,
                actual: 4
            }
        ));
        assert!(session.attempts().is_empty());
        assert_eq!(session.current_guess(), "gran");
    }

    #[test]
    fn unknown_word_rejected_without_consuming_attempt() {
        let (mut session, dictionary) = mango_game();
        type_word(&mut session, "zzzzz");

        let err = session.submit(&dictionary).unwrap_err();
        assert!(matches!(err, GameError::NotInDictionary(ref w) if w == "zzzzz"));
        assert_eq!(session.remaining_attempts(), MAX_ATTEMPTS);
        assert_eq!(session.keyboard(), &KeyboardStatus::new());
    }

    #[test]
    fn winning_guess_ends_game() {
        let (mut session, dictionary) = mango_game();
        type_word(&mut session, "grand");
        let first = session.submit(&dictionary).unwrap();
        assert_eq!(first.status, GameStatus::Playing);
        assert_eq!(first.feedback.count_correct(), 0);

        let outcome = play(&mut session, "MANGO", &dictionary).unwrap();
        assert_eq!(outcome.status, GameStatus::Won);
        assert!(outcome.feedback.is_perfect());
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                difficulty: Difficulty::Easy,
                won: true,
                guesses_used: 2,
            })
        );

        assert!(!session.push_letter('a'));
        assert!(matches!(
            play(&mut session, "grand", &dictionary),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn exhausting_attempts_loses() {
        let (mut session, dictionary) = mango_game();
        for word in ["grand", "crane", "slate", "plant", "tiger"] {
            let outcome = play(&mut session, word, &dictionary).unwrap();
            assert_eq!(outcome.status, GameStatus::Playing);
        }
        assert!(session.outcome().is_none());

        let last = play(&mut session, "water", &dictionary).unwrap();
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(session.remaining_attempts(), 0);
        assert_eq!(
            session.outcome(),
            Some(GameOutcome {
                difficulty: Difficulty::Easy,
                won: false,
                guesses_used: MAX_ATTEMPTS,
            })
        );
    }

    #[test]
    fn rejected_submit_word_restores_partial_guess() {
        let (mut session, dictionary) = mango_game();
        type_word(&mut session, "gr");
        assert!(play(&mut session, "zzzzz", &dictionary).is_err());
        assert_eq!(session.current_guess(), "gr");
    }

    #[test]
    fn submit_word_renders_accepted_rows() {
        let (mut session, dictionary) = mango_game();
        let mut view = RecordingView::default();

        assert!(session.submit_word("zzzzz", &dictionary, &mut view).is_err());
        session.submit_word("grand", &dictionary, &mut view).unwrap();
        session.submit_word("mango", &dictionary, &mut view).unwrap();

        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[1].0, "mango");
        assert!(view.rows[1].1.is_perfect());
        assert_eq!(view.keyboards, 2);
    }

    #[test]
    fn session_keyboard_matches_replay() {
        let (mut session, dictionary) = mango_game();
        for word in ["grand", "plant", "mango"] {
            play(&mut session, word, &dictionary).unwrap();
        }

        let guesses: Vec<Word> = session.guesses().cloned().collect();
        let replayed = aggregate_keyboard_status(&guesses, session.target());
        assert_eq!(session.keyboard(), &replayed);
        assert_eq!(session.keyboard().get(b'm'), KeyStatus::Correct);
        assert_eq!(session.keyboard().get(b'p'), KeyStatus::Absent);
    }

    #[test]
    fn view_notified_on_accepted_submission_only() {
        let (mut session, dictionary) = mango_game();
        let mut view = RecordingView::default();

        type_word(&mut session, "zzzzz");
        assert!(session.submit_and_render(&dictionary, &mut view).is_err());
        assert!(view.rows.is_empty());

        while session.pop_letter().is_some() {}
        type_word(&mut session, "grand");
        session.submit_and_render(&dictionary, &mut view).unwrap();

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].0, "grand");
        assert_eq!(view.rows[0].1.as_slice()[0], LetterFeedback::Present);
        assert_eq!(view.keyboards, 1);
    }

    #[test]
    fn start_picks_target_from_tier_lists() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            let (session, dictionary) =
                GameSession::start(difficulty, &EmbeddedWords, &mut rng).unwrap();
            assert!(difficulty.default_lengths().contains(&session.word_length()));
            assert!(dictionary.contains(session.target()));
            assert!(session.is_playing());
        }
    }

    #[test]
    fn start_is_reproducible_with_same_seed() {
        let (a, _) =
            GameSession::start(Difficulty::Hard, &EmbeddedWords, &mut StdRng::seed_from_u64(3))
                .unwrap();
        let (b, _) =
            GameSession::start(Difficulty::Hard, &EmbeddedWords, &mut StdRng::seed_from_u64(3))
                .unwrap();
        assert_eq!(a.target(), b.target());
    }
}
