//! Wordle Tiles
//!
//! A single-player Wordle: six rows, five tiles, duplicate-aware feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tiles::core::Word;
//! use wordle_tiles::session::{GameStatus, Intent, Session};
//!
//! let mut session = Session::new(Word::new("words").unwrap());
//! for ch in "world".chars() {
//!     session.apply(Intent::AppendLetter(ch)).unwrap();
//! }
//! session.apply(Intent::SubmitGuess).unwrap();
//!
//! println!("{}", session.row(0).feedback().unwrap());
//! assert_eq!(session.status(), GameStatus::Playing);
//! ```

// Core domain types
pub mod core;

// Board and state machine
pub mod session;

// Target word selection
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
