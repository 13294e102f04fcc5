//! Word lists for each difficulty tier
//!
//! A [`WordSource`] supplies the word list for a tier and length; the game
//! wraps that list in a [`Dictionary`] which answers "is this guess accepted"
//! and picks random targets.

pub mod embedded;
pub mod loader;

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, Word};
use crate::error::GameError;
use crate::game::Difficulty;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplier of word lists per difficulty and length
pub trait WordSource {
    /// Word lengths available for a tier, ascending
    ///
    /// # Errors
    /// Returns an I/O error if the backing store cannot be inspected.
    fn lengths(&self, difficulty: Difficulty) -> io::Result<Vec<usize>>;

    /// Load the list for a tier and length
    ///
    /// # Errors
    /// Returns an I/O error if the backing store cannot be read.
    fn load_word_list(&self, difficulty: Difficulty, length: usize) -> io::Result<Vec<Word>>;
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn lengths(&self, difficulty: Difficulty) -> io::Result<Vec<usize>> {
        Ok(difficulty
            .default_lengths()
            .iter()
            .copied()
            .filter(|&len| !embedded::builtin(difficulty, len).is_empty())
            .collect())
    }

    fn load_word_list(&self, difficulty: Difficulty, length: usize) -> io::Result<Vec<Word>> {
        Ok(loader::words_from_slice(embedded::builtin(difficulty, length)))
    }
}

/// Lists read from `<root>/<difficulty>/<length>.txt`
#[derive(Debug, Clone)]
pub struct DirectoryWords {
    root: PathBuf,
}

impl DirectoryWords {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn list_path(&self, difficulty: Difficulty, length: usize) -> PathBuf {
        self.root
            .join(difficulty.name())
            .join(format!("{length}.txt"))
    }
}

impl WordSource for DirectoryWords {
    fn lengths(&self, difficulty: Difficulty) -> io::Result<Vec<usize>> {
        let mut lengths: Vec<usize> = fs::read_dir(self.root.join(difficulty.name()))?
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
                    return None;
                }
                path.file_stem()?.to_str()?.parse::<usize>().ok()
            })
            .filter(|len| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(len))
            .collect();
        lengths.sort_unstable();
        Ok(lengths)
    }

    fn load_word_list(&self, difficulty: Difficulty, length: usize) -> io::Result<Vec<Word>> {
        loader::load_words_of_length(self.list_path(difficulty, length), length)
    }
}

/// Accepted words for one tier and length
///
/// Target candidates and valid guesses are the same set.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, dropping duplicate entries
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();
        Self { words, index }
    }

    /// Load the list for a tier and length from a source
    ///
    /// # Errors
    /// Returns `GameError::WordList` if the source fails and
    /// `GameError::EmptyWordList` if it has no words of that length.
    pub fn load<S: WordSource + ?Sized>(
        source: &S,
        difficulty: Difficulty,
        length: usize,
    ) -> Result<Self, GameError> {
        let words: Vec<Word> = source
            .load_word_list(difficulty, length)?
            .into_iter()
            .filter(|w| w.len() == length)
            .collect();

        if words.is_empty() {
            return Err(GameError::EmptyWordList { difficulty, length });
        }

        Ok(Self::new(words))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.text())
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a uniformly random target using the given randomness source
    ///
    /// Returns `None` for an empty dictionary.
    pub fn pick_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}
