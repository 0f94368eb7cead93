//! Guess scoring command
//!
//! Scores one guess against one target without playing a session.

use crate::core::{Feedback, Word};
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug)]
pub struct ScoreResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Validate both words, then evaluate the guess
///
/// # Errors
///
/// Returns an error if either word is not exactly 5 ASCII letters.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let target = Word::new(target).with_context(|| format!("Invalid target '{target}'"))?;

    Ok(ScoreResult {
        guess,
        target,
        feedback: Feedback::evaluate(&guess, &target),
    })
}
