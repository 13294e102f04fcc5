//! Error types for game play and statistics

use crate::core::WordError;
use crate::game::Difficulty;
use std::fmt;
use std::io;

/// Errors surfaced while setting up or playing a game
#[derive(Debug)]
pub enum GameError {
    /// Text that is not a well-formed word
    InvalidWord(WordError),
    /// Guess length differs from the target length
    InvalidGuessLength { expected: usize, actual: usize },
    /// Well-formed guess missing from the accepted word set
    NotInDictionary(String),
    /// Submission after the game already ended
    GameOver,
    /// Word source offers no lengths for a tier
    NoWordLengths(Difficulty),
    /// No words available for a tier/length combination
    EmptyWordList { difficulty: Difficulty, length: usize },
    /// Word list could not be read
    WordList(io::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::InvalidGuessLength { expected, .. } => {
                write!(f, "Word must be {expected} letters long")
            }
            Self::NotInDictionary(word) => {
                write!(f, "Not in word list: {}", word.to_uppercase())
            }
            Self::GameOver => write!(f, "The game is already over"),
            Self::NoWordLengths(difficulty) => {
                write!(f, "No word lists configured for {difficulty}")
            }
            Self::EmptyWordList { difficulty, length } => {
                write!(f, "No {length}-letter words available for {difficulty}")
            }
            Self::WordList(e) => write!(f, "Failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::WordList(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GameError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        Self::WordList(e)
    }
}

/// Errors from loading or persisting statistics
#[derive(Debug)]
pub enum StatsError {
    /// Stored blob is unreadable; callers fall back to a fresh record
    Corrupted(String),
    /// Storage backend failed to write
    Persist(io::Error),
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted(reason) => write!(f, "Corrupted statistics: {reason}"),
            Self::Persist(e) => write!(f, "Failed to save statistics: {e}"),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persist(e) => Some(e),
            Self::Corrupted(_) => None,
        }
    }
}
