//! Target word pools
//!
//! The embedded pool is compiled into the binary; custom pools load from a
//! file. Pools only supply targets, guesses are never checked against them.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};
