//! Interactive TUI interface
//!
//! Keyboard-driven play on the terminal.

mod app;
mod rendering;

pub use app::{App, KeyAction, LogPanel, MessageStyle, map_key, run_tui};
