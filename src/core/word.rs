//! Wordle word representation
//!
//! A Word stores exactly five uppercase ASCII letters. Both the target and
//! every submitted guess are Words, so the evaluator never sees bad input.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in every word, and tiles in every row
pub const WORD_LENGTH: usize = 5;

/// A 5-letter word, normalized to uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    letters: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters, found {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_tiles::core::Word;
    ///
    /// let word = Word::new("words").unwrap();
    /// assert_eq!(word.text(), "WORDS");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("w0rds").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let count = text.chars().count();
        if count != WORD_LENGTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = [0u8; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = normalize_letter(ch).ok_or(WordError::InvalidCharacter(ch))?;
        }

        Ok(Self { letters })
    }

    /// Build a Word from letters already known to be uppercase ASCII
    ///
    /// Used by the session when a filled row is read back.
    #[must_use]
    pub(crate) const fn from_letters(letters: [u8; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> [u8; WORD_LENGTH] {
        self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Get the word as an owned uppercase string
    #[must_use]
    pub fn text(&self) -> String {
        self.letters.iter().map(|&b| char::from(b)).collect()
    }

    /// Count occurrences of a letter
    #[must_use]
    pub fn occurrences(&self, letter: u8) -> usize {
        self.letters.iter().filter(|&&b| b == letter).count()
    }
}

/// Normalize a single typed character into a stored letter
///
/// Returns the uppercase ASCII byte, or `None` if `ch` is not an ASCII letter.
///
/// # Examples
/// ```
/// use wordle_tiles::core::normalize_letter;
///
/// assert_eq!(normalize_letter('w'), Some(b'W'));
/// assert_eq!(normalize_letter('Q'), Some(b'Q'));
/// assert_eq!(normalize_letter('7'), None);
/// ```
#[must_use]
pub const fn normalize_letter(ch: char) -> Option<u8> {
    if ch.is_ascii_alphabetic() {
        Some((ch as u8).to_ascii_uppercase())
    } else {
        None
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("WORDS").unwrap();
        assert_eq!(word.text(), "WORDS");
        assert_eq!(&word.letters(), b"WORDS");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("words").unwrap();
        assert_eq!(word.text(), "WORDS");

        let word2 = Word::new("WoRdS").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new("too long"), Err(WordError::InvalidLength(8)));
        assert_eq!(Word::new("word"), Err(WordError::InvalidLength(4)));
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("word5"), Err(WordError::InvalidCharacter('5')));
        assert!(Word::new("wor s").is_err());
        assert!(Word::new("word!").is_err());
        // Non-ASCII letters are five chars but still rejected
        assert_eq!(Word::new("wördS"), Err(WordError::InvalidCharacter('ö')));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.letter_at(0), b'S');
        assert_eq!(word.letter_at(2), b'E');
        assert_eq!(word.letter_at(4), b'D');
    }

    #[test]
    fn word_occurrences() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.occurrences(b'E'), 2);
        assert_eq!(word.occurrences(b'S'), 1);
        assert_eq!(word.occurrences(b'Z'), 0);
    }

    #[test]
    fn word_parse_and_display() {
        let word: Word = "crane".parse().unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }

    #[test]
    fn normalize_rejects_non_letters() {
        assert_eq!(normalize_letter('a'), Some(b'A'));
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('é'), None);
    }
}
