//! Display functions for game and statistics output

use super::formatters::{create_progress_bar, feedback_tiles, keyboard_rows};
use crate::core::{Feedback, KeyboardStatus, Word};
use crate::game::{Difficulty, GameView, MAX_ATTEMPTS};
use crate::stats::StatisticsRecord;
use colored::Colorize;

/// Print the persisted statistics panel
pub fn print_statistics(record: &StatisticsRecord) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Played:          {}", record.games_played);
    println!(
        "   Win %:           {}",
        format!("{}", record.win_percentage())
            .bright_yellow()
            .bold()
    );
    println!("   Current streak:  {}", record.current_streak);
    println!("   Max streak:      {}", record.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let most = f64::from(record.most_frequent_guess_count());
    for guesses in 1..=MAX_ATTEMPTS as u8 {
        let count = record.wins_in(guesses);
        let bar = create_progress_bar(f64::from(count), most, 30);
        println!("   {guesses}: {} {count:4}", bar.green());
    }

    println!("\n🎯 {}", "By difficulty:".bright_cyan().bold());
    for difficulty in Difficulty::ALL {
        let stats = record.difficulty(difficulty);
        println!(
            "   {:<8} {} / {}",
            difficulty.label(),
            stats.wins.to_string().green(),
            stats.total
        );
    }
    println!();
}

/// Print the feedback for a single guess/target pair
pub fn print_check_result(guess: &Word, target: &Word, feedback: &Feedback) {
    println!(
        "\n{} vs {}",
        guess.text().to_uppercase().bright_white().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    );
    println!("  {}", feedback_tiles(guess, feedback));
    println!("  {}", feedback.to_emoji());
    println!(
        "  {} correct, {} present",
        feedback.count_correct(),
        feedback.count_present()
    );
}

/// Line-oriented view: prints each accepted row and the keyboard below it
#[derive(Debug, Default)]
pub struct TerminalView {
    rows: usize,
}

impl GameView for TerminalView {
    fn render_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        self.rows += 1;
        println!(
            "\n  {}. {}  {}",
            self.rows.to_string().bright_black(),
            feedback_tiles(guess, feedback),
            feedback.to_emoji()
        );
    }

    fn render_keyboard(&mut self, keyboard: &KeyboardStatus) {
        println!();
        for row in keyboard_rows(keyboard) {
            println!("     {row}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    #[test]
    fn terminal_view_counts_rows() {
        let mut view = TerminalView::default();
        let guess = Word::new("crane").unwrap();
        let feedback = evaluate(&guess, &Word::new("slate").unwrap());

        view.render_feedback(&guess, &feedback);
        view.render_feedback(&guess, &feedback);
        assert_eq!(view.rows, 2);
    }
}
