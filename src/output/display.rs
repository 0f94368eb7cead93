//! Display functions for line-mode results

use super::formatters::{row_line, share_grid};
use crate::core::{Feedback, Word};
use crate::session::{GameStatus, Rejection, Session};
use colored::Colorize;

/// Print every row of the board, filled or not
pub fn print_board(session: &Session) {
    println!();
    for row in session.board().rows() {
        println!("  {}", row_line(row));
    }
    println!();
}

/// Print a rejected intent the way the player should see it
pub fn print_rejection(rejection: Rejection) {
    if rejection.is_visible() {
        println!("{}", format!("⚠ {rejection}").yellow());
    }
}

/// Print the terminal notification once a session ends
pub fn print_outcome(session: &Session) {
    println!("{}", "═".repeat(40).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let used = session.guesses_used();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {used} {}!",
                    if used == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameStatus::Lost => {
            let target = session
                .revealed_target()
                .map(|w| w.text())
                .unwrap_or_default();
            println!(
                "{} {}",
                "❌ Out of guesses. The word was".red().bold(),
                target.bright_yellow().bold()
            );
        }
        GameStatus::Playing => {}
    }
    println!("{}", "═".repeat(40).bright_cyan());
    println!("\n{}\n", share_grid(session));
}

/// Print the result of scoring one guess against one target
pub fn print_score_result(guess: &Word, target: &Word, feedback: Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        guess.to_string().bright_white().bold(),
        target.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", feedback.to_emoji());
    for (letter, verdict) in guess.letters().into_iter().zip(feedback.verdicts()) {
        println!("  {}  {verdict}", char::from(letter));
    }
    println!();
}
