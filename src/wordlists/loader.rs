//! Word list loading utilities
//!
//! Provides functions to load word lists from files or from embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Returns a vector of valid Word instances, skipping blank or invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_tiers::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/easy/5.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Load words of exactly `length` letters from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_words_of_length<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let mut words = load_from_file(path)?;
    words.retain(|w| w.len() == length);
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_tiers::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "lamp", "x"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolongword", "ab", "sl4te", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_blank_and_comment_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# easy five-letter words").unwrap();
        writeln!(file, "Mango").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  grand  ").unwrap();
        writeln!(file, "n0pe!").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["mango", "grand"]);
    }

    #[test]
    fn load_words_of_length_filters() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cat\nlamp\ncrane\ndog").unwrap();

        let words = load_words_of_length(file.path(), 3).unwrap();
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| w.len() == 3));
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
