//! Terminal output formatting
//!
//! Display utilities for the line-oriented modes.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_outcome, print_rejection, print_score_result};
