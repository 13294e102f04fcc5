//! TUI rendering with ratatui
//!
//! Board, keyboard and statistics views for the game interface.

use super::app::{ActiveGame, App, AppMode, MessageStyle};
use crate::core::{KeyStatus, LetterFeedback};
use crate::game::{Difficulty, MAX_ATTEMPTS};
use crate::output::formatters::{KEYBOARD_ROWS, create_progress_bar};
use crate::stats::{StatisticsRecord, StatsStore};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: StatsStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board or menu
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    match (&app.mode, &app.game) {
        (AppMode::SelectDifficulty, _) | (_, None) => {
            render_difficulty_menu(f, app, main_chunks[0]);
        }
        (_, Some(game)) => render_board(f, game, main_chunks[0]),
    }
    render_messages(f, app, main_chunks[1]);

    render_keyboard(f, app.game.as_ref(), chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_stats {
        render_stats_popup(f, app.tracker.record(), f.area());
    }
}

fn render_header<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let title = match &app.game {
        Some(game) if app.mode != AppMode::SelectDifficulty => format!(
            "🟩 WORDLE - {} ({} letters)",
            game.session.difficulty().label(),
            game.session.word_length()
        ),
        _ => "🟩 WORDLE".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_difficulty_menu<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let items: Vec<ListItem> = Difficulty::ALL
        .iter()
        .enumerate()
        .map(|(i, &difficulty)| {
            let lengths = app.lengths_label(difficulty);
            let selected = i == app.selected;
            let marker = if selected { "▶ " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(
                "{marker}{}. {:<8} {lengths} letters",
                i + 1,
                difficulty.label()
            ))
            .style(style)
        })
        .collect();

    let menu = List::new(items).block(
        Block::default()
            .title(" Choose Difficulty ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

const fn feedback_color(feedback: LetterFeedback) -> Color {
    match feedback {
        LetterFeedback::Correct => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    }
}

fn tile(letter: char, bg: Option<Color>) -> Span<'static> {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match bg {
        Some(bg) => Span::styled(
            text,
            Style::default()
                .fg(Color::Black)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(text, Style::default().fg(Color::White)),
    }
}

fn render_board(f: &mut Frame, game: &ActiveGame, area: Rect) {
    let session = &game.session;
    let width = session.word_length();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for attempt in session.attempts() {
        let mut spans = Vec::with_capacity(width * 2);
        for (&letter, feedback) in attempt.guess.chars().iter().zip(attempt.feedback.iter()) {
            spans.push(tile(char::from(letter), Some(feedback_color(feedback))));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if session.is_playing() {
        let current: Vec<char> = session.current_guess().chars().collect();
        let mut spans = Vec::with_capacity(width * 2);
        for i in 0..width {
            spans.push(tile(current.get(i).copied().unwrap_or('_'), None));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let used_rows = session.attempts().len() + usize::from(session.is_playing());
    let empty_rows = MAX_ATTEMPTS.saturating_sub(used_rows);
    for _ in 0..empty_rows {
        let spans: Vec<Span> = (0..width)
            .flat_map(|_| {
                [
                    Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Guesses ({}/{MAX_ATTEMPTS}) ",
                session.attempts().len()
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Unseen => Style::default().fg(Color::White),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_keyboard(f: &mut Frame, game: Option<&ActiveGame>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let status =
                        game.map_or(KeyStatus::Unseen, |g| g.session.keyboard().get(letter));
                    [
                        Span::styled(
                            format!(" {} ", char::from(letter.to_ascii_uppercase())),
                            key_style(status),
                        ),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status<S: StatsStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.mode {
        AppMode::SelectDifficulty => "Mode: Menu",
        AppMode::Playing => "Mode: Playing",
        AppMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let record = app.tracker.record();
    let stats_text = format!(
        "Games: {} | Win Rate: {}%",
        record.games_played,
        record.win_percentage()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.show_stats {
        "TAB/Esc: Close stats | Ctrl-C: Quit"
    } else {
        match app.mode {
            AppMode::SelectDifficulty => "↑/↓: Select | Enter: Play | TAB: Stats | q: Quit",
            AppMode::Playing => "Type letters | Enter: Submit | Esc: Menu | TAB: Stats",
            AppMode::GameOver => "n: New Game | r: Replay tier | TAB: Stats | q: Quit",
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_stats_popup(f: &mut Frame, record: &StatisticsRecord, area: Rect) {
    let popup = centered_rect(60, 70, area);

    let mut lines = vec![
        Line::from(format!("Played:          {}", record.games_played)),
        Line::from(format!("Win %:           {}", record.win_percentage())),
        Line::from(format!("Current streak:  {}", record.current_streak)),
        Line::from(format!("Max streak:      {}", record.max_streak)),
        Line::from(""),
        Line::from(Span::styled(
            "Guess distribution",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let most = f64::from(record.most_frequent_guess_count());
    for guesses in 1..=MAX_ATTEMPTS as u8 {
        let count = record.wins_in(guesses);
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled(
                create_progress_bar(f64::from(count), most, 20),
                Style::default().fg(Color::Green),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "By difficulty",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for difficulty in Difficulty::ALL {
        let stats = record.difficulty(difficulty);
        lines.push(Line::from(format!(
            "{:<8} {} / {}",
            difficulty.label(),
            stats.wins,
            stats.total
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}
