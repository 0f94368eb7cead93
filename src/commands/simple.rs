//! Simple line-oriented play mode
//!
//! Text-based game without the TUI. Each input line is typed into the
//! session letter by letter and then submitted, so the same intents and
//! rejections apply as with the keyboard.

use crate::config::TargetSource;
use crate::output::{print_board, print_outcome, print_rejection};
use crate::session::{Intent, Rejection, Session, SessionEvent};
use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

/// Type a whole line into the current row and submit it
///
/// On any rejection the letters typed by this call are deleted again, so the
/// row is back where it started.
///
/// # Errors
///
/// Returns the first `Rejection` hit while typing or submitting.
pub fn feed_line(session: &mut Session, line: &str) -> Result<SessionEvent, Rejection> {
    let start = session.current_tile();

    let typed = line
        .chars()
        .try_for_each(|ch| session.apply(Intent::AppendLetter(ch)).map(drop));
    let result = typed.and_then(|()| session.apply(Intent::SubmitGuess));

    if result.is_err() && !session.is_over() {
        while session.current_tile() > start {
            if session.apply(Intent::DeleteLetter).is_err() {
                break;
            }
        }
    }
    result
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(targets: &mut TargetSource) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║        Wordle - Simple Mode          ║");
    println!("╚══════════════════════════════════════╝\n");

    println!("Guess the 5-letter word in 6 tries. Type a guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a new game once this one ends\n");

    let mut session = Session::new(targets.next_target());
    print_board(&session);

    loop {
        let prompt = if session.is_over() {
            "Play again? (new/quit)".to_string()
        } else {
            format!("Guess {}", session.current_row() + 1)
        };
        let Some(input) = get_user_input(&prompt)? else {
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" | "yes" | "y" if session.is_over() => {
                session = Session::new(targets.next_target());
                println!("\n🔄 New game started!");
                print_board(&session);
            }
            _ if session.is_over() => print_rejection(Rejection::GameAlreadyOver),
            _ => match feed_line(&mut session, &input) {
                Ok(event) => {
                    debug!(?event, "line accepted");
                    print_board(&session);
                    if event.is_terminal() {
                        print_outcome(&session);
                    }
                }
                Err(rejection) => print_rejection(rejection),
            },
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::GameStatus;

    fn session() -> Session {
        Session::new(Word::new("WORDS").unwrap())
    }

    #[test]
    fn full_line_is_submitted() {
        let mut s = session();
        let event = feed_line(&mut s, "crane").unwrap();
        assert!(matches!(event, SessionEvent::GuessScored { row: 0, .. }));
        assert_eq!(s.current_row(), 1);
    }

    #[test]
    fn short_line_is_rolled_back() {
        let mut s = session();
        assert_eq!(feed_line(&mut s, "wor"), Err(Rejection::RowIncomplete));
        assert_eq!(s.current_tile(), 0);
        assert_eq!(s.current_word(), "");
    }

    #[test]
    fn long_line_hits_full_row() {
        let mut s = session();
        assert_eq!(feed_line(&mut s, "wordss"), Err(Rejection::RowFull));
        assert_eq!(s.current_tile(), 0);
        assert_eq!(s.current_row(), 0);
    }

    #[test]
    fn non_letters_are_rejected() {
        let mut s = session();
        assert_eq!(
            feed_line(&mut s, "wo-ds"),
            Err(Rejection::InvalidLetter('-'))
        );
        assert_eq!(s.current_tile(), 0);
    }

    #[test]
    fn winning_line_ends_session() {
        let mut s = session();
        let event = feed_line(&mut s, "Words").unwrap();
        assert!(event.is_terminal());
        assert_eq!(s.status(), GameStatus::Won);
        assert_eq!(feed_line(&mut s, "crane"), Err(Rejection::GameAlreadyOver));
    }
}
