//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyStatus, KeyboardStatus, LetterFeedback, Word};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Guess letters as colored tiles, e.g. ` G  R  A  N  D `
#[must_use]
pub fn feedback_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.iter())
        .map(|(&letter, f)| tile(letter, f).to_string())
        .collect()
}

fn tile(letter: u8, feedback: LetterFeedback) -> ColoredString {
    let text = format!(" {} ", char::from(letter).to_ascii_uppercase());
    match feedback {
        LetterFeedback::Correct => text.black().on_green().bold(),
        LetterFeedback::Present => text.black().on_yellow().bold(),
        LetterFeedback::Absent => text.white().on_bright_black(),
    }
}

/// Keyboard rows with each key colored by its best known status
#[must_use]
pub fn keyboard_rows(keyboard: &KeyboardStatus) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: Vec<String> = row
                .bytes()
                .map(|letter| key(letter, keyboard.get(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(indent), keys.join(" "))
        })
        .collect()
}

fn key(letter: u8, status: KeyStatus) -> ColoredString {
    let text = char::from(letter).to_ascii_uppercase().to_string();
    match status {
        KeyStatus::Correct => text.black().on_green(),
        KeyStatus::Present => text.black().on_yellow(),
        KeyStatus::Absent => text.bright_black(),
        KeyStatus::Unseen => text.white(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn tiles_show_uppercase_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("grand").unwrap();
        let feedback = evaluate(&guess, &Word::new("mango").unwrap());
        assert_eq!(feedback_tiles(&guess, &feedback), " G  R  A  N  D ");
    }

    #[test]
    fn keyboard_has_three_staggered_rows() {
        colored::control::set_override(false);
        let rows = keyboard_rows(&KeyboardStatus::new());
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Q W E"));
        assert!(rows[1].starts_with(" A S"));
        assert!(rows[2].starts_with("  Z X"));
    }

    #[test]
    fn keyboard_layout_covers_alphabet() {
        let mut letters: Vec<u8> = KEYBOARD_ROWS.iter().flat_map(|r| r.bytes()).collect();
        letters.sort_unstable();
        assert_eq!(letters, (b'a'..=b'z').collect::<Vec<_>>());
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(0.0, 0.0, 4), "░░░░");
    }
}
