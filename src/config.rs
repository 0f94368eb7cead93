//! Game configuration
//!
//! Decides where each session's target word comes from.

use crate::core::Word;
use crate::wordlists::ANSWERS;
use crate::wordlists::loader::{load_from_file, words_from_slice};
use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::path::Path;
use tracing::info;

/// Target used when nothing else is configured
pub const DEFAULT_TARGET: Word = Word::from_letters(*b"WORDS");

/// Source of target words for successive sessions
pub enum TargetSource {
    /// Every session uses the same word
    Fixed(Word),
    /// Every session draws uniformly from a pool
    Random { pool: Vec<Word>, rng: StdRng },
}

impl TargetSource {
    /// Resolve the source from command-line options
    ///
    /// An explicit target wins. Otherwise targets are drawn from the custom
    /// pool when `word_list` is given, or from the embedded pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit target is not a 5-letter word, or if
    /// the word list cannot be read or contains no valid words.
    pub fn resolve(
        target: Option<&str>,
        word_list: Option<&Path>,
        seed: Option<u64>,
    ) -> Result<Self> {
        if let Some(text) = target {
            let word = Word::new(text).with_context(|| format!("Invalid target word '{text}'"))?;
            return Ok(Self::Fixed(word));
        }

        let pool = match word_list {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?,
            None => words_from_slice(ANSWERS),
        };

        Self::random(pool, seed)
    }

    /// Draw targets from `pool`, optionally with a reproducible seed
    ///
    /// # Errors
    ///
    /// Returns an error if `pool` is empty.
    pub fn random(pool: Vec<Word>, seed: Option<u64>) -> Result<Self> {
        if pool.is_empty() {
            bail!("Word list contains no valid 5-letter words");
        }
        info!(pool_size = pool.len(), seeded = seed.is_some(), "random targets");

        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Ok(Self::Random { pool, rng })
    }

    /// Target for the next session
    pub fn next_target(&mut self) -> Word {
        match self {
            Self::Fixed(word) => *word,
            Self::Random { pool, rng } => pool.choose(rng).copied().unwrap_or(DEFAULT_TARGET),
        }
    }
}
