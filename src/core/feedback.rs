//! Guess evaluation and per-tile feedback
//!
//! A guess is scored one tile at a time:
//! - `Correct` = right letter, right position
//! - `Present` = letter is in the target, wrong position
//! - `Absent`  = letter is not in the target (after duplicates are claimed)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Outcome for a single tile of a scored guess
///
/// Ordered by strength so the best verdict seen for a letter can be kept
/// with `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji square used when sharing or printing a row
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        })
    }
}

/// Feedback for one submitted guess, one verdict per tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All tiles correct
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Wrap raw verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `target`
    ///
    /// Pure and deterministic: both words are copied into scratch slots and
    /// the caller's values are never touched.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both the guess slot and
    ///    the target slot
    /// 2. Second pass: for each unconsumed guess letter, claim the leftmost
    ///    unconsumed matching target slot, if any
    ///
    /// A target letter is claimed at most once, so a repeated guess letter is
    /// only marked as often as it still occurs in the target.
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::{Feedback, Verdict, Word};
    ///
    /// let guess = Word::new("world").unwrap();
    /// let target = Word::new("words").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// use Verdict::{Absent, Correct, Present};
    /// assert_eq!(feedback.verdicts(), [Correct, Correct, Correct, Absent, Present]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut guess_left = guess.letters().map(Some);
        let mut target_left = target.letters().map(Some);

        // First pass: exact position matches
        // Allow: Index needed to compare and consume both copies at i
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess_left[i] == target_left[i] {
                result[i] = Verdict::Correct;
                guess_left[i] = None;
                target_left[i] = None;
            }
        }

        // Second pass: misplaced letters, leftmost unclaimed target slot wins
        for (verdict, slot) in result.iter_mut().zip(guess_left) {
            let Some(letter) = slot else { continue };

            if let Some(claimed) = target_left.iter_mut().find(|t| **t == Some(letter)) {
                *claimed = None;
                *verdict = Verdict::Present;
            }
        }

        Self::new(result)
    }

    /// Get the verdicts in tile order
    #[inline]
    #[must_use]
    pub const fn verdicts(self) -> [Verdict; WORD_LENGTH] {
        self.0
    }

    /// Get the verdict for one tile (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(self, position: usize) -> Verdict {
        self.0[position]
    }

    /// Check if every tile is correct
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Count tiles carrying `verdict`
    #[must_use]
    pub fn count(self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        for (slot, ch) in verdicts.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self::new(verdicts))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
