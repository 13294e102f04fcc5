//! TUI application state and logic

use crate::game::{Difficulty, GameSession, GameStatus};
use crate::stats::{StatisticsTracker, StatsStore};
use crate::wordlists::{Dictionary, WordSource};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    SelectDifficulty,
    Playing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// A running game and the dictionary its guesses are checked against
pub struct ActiveGame {
    pub session: GameSession,
    pub dictionary: Dictionary,
}

/// Application state
pub struct App<'a, S: StatsStore> {
    pub source: &'a dyn WordSource,
    pub tracker: StatisticsTracker<S>,
    pub rng: StdRng,
    pub mode: AppMode,
    pub selected: usize,
    /// Word lengths each tier offers, read once from the source
    pub tier_lengths: BTreeMap<Difficulty, Vec<usize>>,
    pub game: Option<ActiveGame>,
    pub messages: Vec<Message>,
    pub show_stats: bool,
    pub should_quit: bool,
}

impl<'a, S: StatsStore> App<'a, S> {
    #[must_use]
    pub fn new(source: &'a dyn WordSource, tracker: StatisticsTracker<S>, rng: StdRng) -> Self {
        let tier_lengths = Difficulty::ALL
            .into_iter()
            .map(|difficulty| {
                let lengths = source.lengths(difficulty).unwrap_or_else(|e| {
                    log::warn!("Failed to list {difficulty} word lengths: {e}");
                    Vec::new()
                });
                (difficulty, lengths)
            })
            .collect();

        Self {
            source,
            tracker,
            rng,
            mode: AppMode::SelectDifficulty,
            selected: 0,
            tier_lengths,
            game: None,
            messages: vec![Message {
                text: "Pick a difficulty to start.".to_string(),
                style: MessageStyle::Info,
            }],
            show_stats: false,
            should_quit: false,
        }
    }

    /// Currently highlighted difficulty on the selection screen
    #[must_use]
    pub fn selected_difficulty(&self) -> Difficulty {
        Difficulty::ALL[self.selected % Difficulty::ALL.len()]
    }

    /// Lengths offered for a tier as shown on the menu, e.g. "5/6/7"
    #[must_use]
    pub fn lengths_label(&self, difficulty: Difficulty) -> String {
        match self.tier_lengths.get(&difficulty) {
            Some(lengths) if !lengths.is_empty() => lengths
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("/"),
            _ => "no".to_string(),
        }
    }

    pub fn start_game(&mut self, difficulty: Difficulty) {
        match GameSession::start(difficulty, self.source, &mut self.rng) {
            Ok((session, dictionary)) => {
                let length = session.word_length();
                self.game = Some(ActiveGame {
                    session,
                    dictionary,
                });
                self.mode = AppMode::Playing;
                self.show_stats = false;
                self.messages.clear();
                self.add_message(
                    &format!("{} game: guess the {length}-letter word!", difficulty.label()),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                log::error!("Failed to start {difficulty} game: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Start a game with a fixed target and dictionary
    #[cfg(test)]
    pub fn start_with(&mut self, session: GameSession, dictionary: Dictionary) {
        self.game = Some(ActiveGame {
            session,
            dictionary,
        });
        self.mode = AppMode::Playing;
        self.messages.clear();
    }

    pub fn submit_guess(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        match game.session.submit(&game.dictionary) {
            Ok(outcome) => {
                if outcome.status != GameStatus::Playing {
                    self.finish_game();
                }
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_game(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let Some(outcome) = game.session.outcome() else {
            return;
        };
        let target = game.session.target().text().to_uppercase();

        self.mode = AppMode::GameOver;
        if outcome.won {
            let celebration = match outcome.guesses_used {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                _ => "😅 PHEW! Got it in six! 😅",
            };
            self.add_message(celebration, MessageStyle::Success);
        } else {
            self.add_message("Game Over", MessageStyle::Error);
        }
        self.add_message(&format!("The word was: {target}"), MessageStyle::Info);

        let recorded = self.tracker.record_outcome(outcome).map(|_| ());
        if let Err(e) = recorded {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
        self.add_message(
            "Press 'n' for new game, 'r' to replay this tier or 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Back to the selection screen, abandoning any game in progress
    pub fn back_to_menu(&mut self) {
        if let Some(game) = &self.game {
            self.selected = Difficulty::ALL
                .iter()
                .position(|&d| d == game.session.difficulty())
                .unwrap_or(0);
        }
        self.game = None;
        self.mode = AppMode::SelectDifficulty;
        self.messages.clear();
        self.add_message("Pick a difficulty to start.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Tab {
            self.show_stats = !self.show_stats;
            return;
        }

        if self.show_stats {
            if key.code == KeyCode::Esc {
                self.show_stats = false;
            }
            return;
        }

        match self.mode {
            AppMode::SelectDifficulty => self.handle_menu_key(key.code),
            AppMode::Playing => self.handle_playing_key(key.code),
            AppMode::GameOver => self.handle_game_over_key(key.code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let tiers = Difficulty::ALL.len();
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.selected = (self.selected + tiers - 1) % tiers,
            KeyCode::Down | KeyCode::Char('j') => self.selected = (self.selected + 1) % tiers,
            KeyCode::Char('1' | 'e') => self.start_game(Difficulty::Easy),
            KeyCode::Char('2' | 'm') => self.start_game(Difficulty::Medium),
            KeyCode::Char('3' | 'h') => self.start_game(Difficulty::Hard),
            KeyCode::Enter => self.start_game(self.selected_difficulty()),
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Enter => self.submit_guess(),
            KeyCode::Backspace => {
                if let Some(game) = self.game.as_mut() {
                    game.session.pop_letter();
                }
            }
            KeyCode::Char(c) => {
                if let Some(game) = self.game.as_mut() {
                    game.session.push_letter(c);
                }
            }
            _ => {}
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') | KeyCode::Enter | KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char('r') => {
                if let Some(difficulty) = self.game.as_ref().map(|g| g.session.difficulty()) {
                    self.start_game(difficulty);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StatsStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: StatsStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::stats::MemoryStatsStore;
    use crate::wordlists::EmbeddedWords;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn press(app: &mut App<'_, MemoryStatsStore>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_and_enter(app: &mut App<'_, MemoryStatsStore>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn app_with_target(target: &str) -> App<'static, MemoryStatsStore> {
        let tracker = StatisticsTracker::load(MemoryStatsStore::new());
        let mut app = App::new(&EmbeddedWords, tracker, StdRng::seed_from_u64(1));
        let dictionary = Dictionary::new(words_from_slice(&["mango", "grand", "crane"]));
        let session = GameSession::new(Difficulty::Medium, Word::new(target).unwrap());
        app.start_with(session, dictionary);
        app
    }

    struct FourLetterEasyOnly;

    impl WordSource for FourLetterEasyOnly {
        fn lengths(&self, difficulty: Difficulty) -> io::Result<Vec<usize>> {
            Ok(match difficulty {
                Difficulty::Easy => vec![4, 9],
                _ => Vec::new(),
            })
        }

        fn load_word_list(&self, _: Difficulty, length: usize) -> io::Result<Vec<Word>> {
            Ok(if length == 4 {
                words_from_slice(&["lamp", "tree"])
            } else {
                Vec::new()
            })
        }
    }

    #[test]
    fn menu_lists_lengths_from_source() {
        let tracker = StatisticsTracker::load(MemoryStatsStore::new());
        let app = App::new(&FourLetterEasyOnly, tracker, StdRng::seed_from_u64(1));
        assert_eq!(app.lengths_label(Difficulty::Easy), "4/9");
        assert_eq!(app.lengths_label(Difficulty::Hard), "no");

        let tracker = StatisticsTracker::load(MemoryStatsStore::new());
        let app = App::new(&EmbeddedWords, tracker, StdRng::seed_from_u64(1));
        assert_eq!(app.lengths_label(Difficulty::Medium), "5/6/7");
    }

    #[test]
    fn menu_navigation_wraps() {
        let tracker = StatisticsTracker::load(MemoryStatsStore::new());
        let mut app = App::new(&EmbeddedWords, tracker, StdRng::seed_from_u64(1));

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_difficulty(), Difficulty::Hard);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected_difficulty(), Difficulty::Easy);
    }

    #[test]
    fn enter_on_menu_starts_selected_tier() {
        let tracker = StatisticsTracker::load(MemoryStatsStore::new());
        let mut app = App::new(&EmbeddedWords, tracker, StdRng::seed_from_u64(9));

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::Playing);
        let game = app.game.as_ref().unwrap();
        assert_eq!(game.session.difficulty(), Difficulty::Medium);
        assert!(game.dictionary.contains(game.session.target()));
    }

    #[test]
    fn winning_records_statistics() {
        let mut app = app_with_target("mango");
        type_and_enter(&mut app, "grand");
        assert_eq!(app.mode, AppMode::Playing);
        type_and_enter(&mut app, "mango");

        assert_eq!(app.mode, AppMode::GameOver);
        let record = app.tracker.record();
        assert_eq!(record.games_won, 1);
        assert_eq!(record.wins_in(2), 1);
        assert_eq!(record.difficulty(Difficulty::Medium).total, 1);
    }

    #[test]
    fn rejected_guess_shows_error_and_keeps_playing() {
        let mut app = app_with_target("mango");
        type_and_enter(&mut app, "zzzzz");

        assert_eq!(app.mode, AppMode::Playing);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("Not in word list"));
        assert!(app.game.as_ref().unwrap().session.attempts().is_empty());
    }

    #[test]
    fn losing_records_loss() {
        let mut app = app_with_target("mango");
        for _ in 0..3 {
            type_and_enter(&mut app, "grand");
            type_and_enter(&mut app, "crane");
        }

        assert_eq!(app.mode, AppMode::GameOver);
        assert_eq!(app.tracker.record().games_played, 1);
        assert_eq!(app.tracker.record().games_won, 0);
    }

    #[test]
    fn escape_abandons_without_recording() {
        let mut app = app_with_target("mango");
        type_and_enter(&mut app, "grand");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, AppMode::SelectDifficulty);
        assert_eq!(app.selected_difficulty(), Difficulty::Medium);
        assert!(app.game.is_none());
        assert_eq!(app.tracker.record().games_played, 0);
    }

    #[test]
    fn tab_toggles_stats_and_blocks_typing() {
        let mut app = app_with_target("mango");
        press(&mut app, KeyCode::Tab);
        assert!(app.show_stats);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.game.as_ref().unwrap().session.current_guess(), "");

        press(&mut app, KeyCode::Esc);
        assert!(!app.show_stats);
        assert_eq!(app.mode, AppMode::Playing);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut app = app_with_target("mango");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
