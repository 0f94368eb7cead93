//! TUI rendering with ratatui
//!
//! Pure downstream view of `App`: reads the session board and never writes.

use super::app::{App, MessageStyle};
use crate::core::Verdict;
use crate::session::{Cell, GameStatus, LetterHints, MAX_ROWS};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};
use std::time::Instant;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(19),    // Main content
            Constraint::Length(3),  // Message line
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board and keyboard
            Constraint::Percentage(50), // Log panel
        ])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_log(f, app, main_chunks[1]);
    render_message(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.banner_visible(Instant::now()) {
        let area = f.area();
        render_banner(f, app, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
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

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_ROWS as u16 * 2 + 2), // Board
            Constraint::Min(5),                          // Keyboard
        ])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, &app.hints, chunks[1]);
}

fn verdict_style(verdict: Verdict) -> Style {
    let style = match verdict {
        Verdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Verdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Verdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    };
    style.add_modifier(Modifier::BOLD)
}

fn tile_span(cell: Cell, is_cursor: bool) -> Span<'static> {
    match (cell.letter_char(), cell.verdict()) {
        (Some(letter), Some(verdict)) => Span::styled(format!(" {letter} "), verdict_style(verdict)),
        (Some(letter), None) => Span::styled(
            format!("[{letter}]"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        (None, _) if is_cursor => Span::styled("[_]", Style::default().fg(Color::Yellow)),
        (None, _) => Span::styled("[ ]", Style::default().fg(Color::DarkGray)),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let mut lines = Vec::with_capacity(MAX_ROWS * 2);

    for (index, row) in session.board().rows().iter().enumerate() {
        let is_current = index == session.current_row() && !session.is_over();
        let mut spans = Vec::with_capacity(row.cells().len() * 2);
        for (tile, cell) in row.cells().iter().enumerate() {
            if tile > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile_span(*cell, is_current && tile == session.current_tile()));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, hints: &LetterHints, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|letter| {
                    let text = format!(" {} ", char::from(letter));
                    match hints.get(letter) {
                        Some(verdict) => Span::styled(text, verdict_style(verdict)),
                        None => Span::styled(text, Style::default().fg(Color::Gray)),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

const fn message_color(style: MessageStyle) -> Color {
    match style {
        MessageStyle::Info => Color::White,
        MessageStyle::Success => Color::Green,
        MessageStyle::Warning => Color::Yellow,
        MessageStyle::Error => Color::Red,
    }
}

fn render_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .log
        .iter()
        .map(|entry| {
            let secs = entry.elapsed.as_secs();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:02}:{:02} ", secs / 60, secs % 60),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    entry.message.text.clone(),
                    Style::default().fg(message_color(entry.message.style)),
                ),
            ]))
        })
        .collect();

    let log = List::new(items).block(
        Block::default()
            .title(" Debug Log ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(log, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match &app.message {
        Some(message) => (message.text.as_str(), message_color(message.style)),
        None => ("", Color::White),
    };

    let message = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(message, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let row_text = match app.session.status() {
        GameStatus::Playing => format!("Guess {}/{MAX_ROWS}", app.session.current_row() + 1),
        GameStatus::Won => "Solved!".to_string(),
        GameStatus::Lost => "Game over".to_string(),
    };
    f.render_widget(Paragraph::new(row_text).alignment(Alignment::Center), chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.games_played(),
        app.games_won()
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[1]);

    let help_text = if app.session.is_over() {
        "Enter: New Game | Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Centered rectangle of the given size, clamped to `area`
fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let (title, body, color) = match session.status() {
        GameStatus::Won => {
            let used = session.guesses_used();
            let celebration = match used {
                1 => "🎯 HOLE IN ONE!",
                2 => "🔥 MAGNIFICENT!",
                3 => "✨ SPLENDID!",
                4 => "👏 GREAT JOB!",
                5 => "🎉 NICE WORK!",
                _ => "😅 PHEW!",
            };
            (
                " 🎉 CONGRATULATIONS! 🎉 ",
                format!("{celebration}\nSolved in {used}/{MAX_ROWS}"),
                Color::Green,
            )
        }
        GameStatus::Lost => {
            let target = session
                .revealed_target()
                .map(|w| w.text())
                .unwrap_or_default();
            (
                " Game Over ",
                format!("The word was\n{target}"),
                Color::Red,
            )
        }
        GameStatus::Playing => return,
    };

    let popup = centered(32, 6, area);
    let banner = Paragraph::new(format!("{body}\n\nEnter: play again"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(banner, popup);
}
