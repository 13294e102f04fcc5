//! Simple interactive CLI mode
//!
//! Line-oriented game without the TUI: type a whole word per turn.

use crate::core::Word;
use crate::game::{Difficulty, GameSession};
use crate::output::{TerminalView, print_statistics};
use crate::stats::{StatisticsTracker, StatsStore};
use crate::wordlists::{Dictionary, WordSource};
use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// With `difficulty` set every game uses that tier, otherwise the player is
/// asked before each game.
///
/// # Errors
///
/// Returns an error if reading user input fails or no word list is
/// available for the chosen difficulty.
pub fn run_simple<W, S, R>(
    source: &W,
    tracker: &mut StatisticsTracker<S>,
    rng: &mut R,
    difficulty: Option<Difficulty>,
) -> Result<()>
where
    W: WordSource + ?Sized,
    S: StatsStore,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a word and press Enter. Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        let difficulty = match difficulty {
            Some(d) => d,
            None => match prompt_difficulty()? {
                Some(d) => d,
                None => return Ok(()),
            },
        };

        let (mut session, dictionary) = GameSession::start(difficulty, source, rng)?;
        let mut view = TerminalView::default();

        println!(
            "\n{} game: guess the {}-letter word in {} tries\n",
            difficulty.label().bright_cyan().bold(),
            session.word_length(),
            session.remaining_attempts()
        );

        while session.is_playing() {
            let prompt = format!("Guess {}", session.attempts().len() + 1);
            let input = get_user_input(&prompt)?.to_lowercase();

            match read_turn(&input, &dictionary) {
                Turn::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                Turn::NewGame => break,
                Turn::Guess => {
                    if let Err(e) = session.submit_word(&input, &dictionary, &mut view) {
                        println!("❌ {e}\n");
                    }
                }
            }
        }

        let Some(outcome) = session.outcome() else {
            println!("\n🔄 New game started!\n");
            continue;
        };

        if outcome.won {
            println!("{}", "🎉 You Won!".bright_green().bold());
        } else {
            println!("{}", "Game Over".red().bold());
        }
        println!(
            "The word was: {}",
            session.target().text().to_uppercase().bright_yellow().bold()
        );

        if let Err(e) = tracker.record_outcome(outcome) {
            println!("{} {e}", "⚠".yellow());
        }
        print_statistics(tracker.record());

        if !matches!(
            get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str(),
            "yes" | "y"
        ) {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }
    }
}

/// What a line typed during a game means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Quit,
    NewGame,
    Guess,
}

/// Accepted words are always guesses; command words only apply otherwise
fn read_turn(input: &str, dictionary: &Dictionary) -> Turn {
    if Word::new(input).is_ok_and(|word| dictionary.contains(&word)) {
        return Turn::Guess;
    }
    match input {
        "quit" | "q" | "exit" => Turn::Quit,
        "new" | "n" => Turn::NewGame,
        _ => Turn::Guess,
    }
}

fn prompt_difficulty() -> Result<Option<Difficulty>> {
    loop {
        let input = get_user_input("Difficulty (easy/medium/hard)")?;
        if matches!(input.as_str(), "quit" | "q" | "exit") {
            return Ok(None);
        }
        match Difficulty::from_str(&input, true) {
            Ok(d) => return Ok(Some(d)),
            Err(_) => println!("❌ Choose easy, medium or hard\n"),
        }
    }
}

/// Get user input with a prompt; end of input reads as "quit"
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn commands_recognised_outside_word_list() {
        let dictionary = Dictionary::new(words_from_slice(&["mango", "grand"]));
        assert_eq!(read_turn("quit", &dictionary), Turn::Quit);
        assert_eq!(read_turn("q", &dictionary), Turn::Quit);
        assert_eq!(read_turn("new", &dictionary), Turn::NewGame);
        assert_eq!(read_turn("mango", &dictionary), Turn::Guess);
        assert_eq!(read_turn("zzzzz", &dictionary), Turn::Guess);
    }

    #[test]
    fn listed_words_win_over_commands() {
        let dictionary = Dictionary::new(words_from_slice(&["exit", "quit", "news"]));
        assert_eq!(read_turn("exit", &dictionary), Turn::Guess);
        assert_eq!(read_turn("quit", &dictionary), Turn::Guess);
        assert_eq!(read_turn("new", &dictionary), Turn::NewGame);
    }
}
