//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::session::{GameStatus, MAX_ROWS, Row, Session};
use colored::{ColoredString, Colorize};

/// Render one tile as a colored block
#[must_use]
pub fn colored_tile(letter: Option<char>, verdict: Option<Verdict>) -> ColoredString {
    let text = format!(" {} ", letter.unwrap_or('_'));
    match verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None => text.bright_white(),
    }
}

/// Render a whole row of tiles
#[must_use]
pub fn row_line(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| colored_tile(cell.letter_char(), cell.verdict()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji grid of the scored rows, with a "3/6" style header
///
/// A lost game reports "X/6". Letters are never included.
#[must_use]
pub fn share_grid(session: &Session) -> String {
    let score = match session.status() {
        GameStatus::Lost => "X".to_string(),
        GameStatus::Won | GameStatus::Playing => session.guesses_used().to_string(),
    };

    let mut out = format!("{score}/{MAX_ROWS}");
    for (_, feedback) in session.board().submitted() {
        out.push('\n');
        out.push_str(&feedback.to_emoji());
    }
    out
}
