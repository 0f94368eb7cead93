//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and directly testable.

mod feedback;
mod word;

pub use feedback::{Feedback, Verdict};
pub use word::{WORD_LENGTH, Word, WordError, normalize_letter};
