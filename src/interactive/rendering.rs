//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{display_pattern, letter_list, split_guesses};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Word
            Constraint::Percentage(20), // Letters
            Constraint::Percentage(40), // History
        ])
        .split(area);

    render_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.game {
        Some(game) => {
            let style = if game.pattern().is_revealed() {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };

            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(display_pattern(game.pattern()), style)),
            ];

            if app.input_mode == InputMode::GameOver
                && let Some(word) = game.reveal_word()
            {
                lines.push(Line::from(""));
                lines.push(Line::from(format!("The word was {word}.")));
            }
            lines
        }
        None => vec![Line::from("No game in progress")],
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let content = app.game.as_ref().map_or_else(Vec::new, |game| {
        let (hits, misses) = split_guesses(game.guesses(), game.pattern());
        vec![
            Line::from(vec![
                Span::raw("Hits:   "),
                Span::styled(letter_list(&hits), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::raw("Misses: "),
                Span::styled(letter_list(&misses), Style::default().fg(Color::Red)),
            ]),
        ]
    });

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guessed ")
            .borders(Borders::ALL),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, entry)| {
            let mut content = format!(
                "{}: {} {:<4} {}",
                app.history.len() - i,
                entry.letter.to_string().to_uppercase(),
                if entry.hit { "hit" } else { "miss" },
                display_pattern(&entry.pattern)
            );
            if app.options.show_pool {
                content.push_str(&format!(
                    "  [{} → {}]",
                    entry.pool_before, entry.pool_after
                ));
            }
            let color = if entry.hit { Color::Green } else { Color::Red };
            ListItem::new(content).style(Style::default().fg(color))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_budget(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_budget(f: &mut Frame, app: &App, area: Rect) {
    let (left, budget) = app
        .game
        .as_ref()
        .map_or((0, 0), |g| (g.guesses_left(), g.budget()));
    let percent = if budget == 0 {
        0
    } else {
        (left * 100 / budget) as u16
    };
    let color = match percent {
        0..=25 => Color::Red,
        26..=50 => Color::Yellow,
        _ => Color::Green,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Wrong Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{left}/{budget}"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let masked = "*".repeat(app.input_buffer.chars().count());
    let (title, content, color) = match app.input_mode {
        InputMode::ChooseMode => (
            " Choose mode: 1 EASY | 2 NORMAL | 3 HARD | 4 TWO PLAYERS ",
            "",
            Color::Cyan,
        ),
        InputMode::Secret => (
            " Secret word (hidden) | Enter to confirm | ESC to cancel ",
            masked.as_str(),
            Color::Magenta,
        ),
        InputMode::HideDigits => (" Hide the numbers too? (y/n) ", "", Color::Magenta),
        InputMode::Budget => (
            " Wrong guesses allowed | Enter to confirm ",
            app.input_buffer.as_str(),
            Color::Magenta,
        ),
        InputMode::Guess => (" Type a letter to guess | ESC to quit ", "", Color::Yellow),
        InputMode::GameOver => (
            " Game over | 'n' new game | 'm' change mode | 'q' quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate() * 100.0
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let detail = match (&app.game, app.options.show_pool) {
        (Some(game), true) => format!(
            "Candidates: {} | Policy: {}",
            game.pool().len(),
            game.policy()
        ),
        (Some(game), false) => format!("Guessed: {}", game.guesses().len()),
        (None, _) => String::new(),
    };
    let detail = Paragraph::new(detail)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(detail, chunks[2]);
}
