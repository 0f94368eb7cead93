//! Per-letter knowledge gathered from scored rows
//!
//! Front ends use this to color an on-screen keyboard.

use super::board::Board;
use crate::core::Verdict;
use rustc_hash::FxHashMap;

/// Best verdict seen so far for each guessed letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    best: FxHashMap<u8, Verdict>,
}

impl LetterHints {
    /// Collect hints from every scored row on the board
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut hints = Self::default();
        for (guess, feedback) in board.submitted() {
            for (letter, verdict) in guess.letters().into_iter().zip(feedback.verdicts()) {
                hints.record(letter, verdict);
            }
        }
        hints
    }

    /// Keep the stronger of the stored and new verdict
    pub fn record(&mut self, letter: u8, verdict: Verdict) {
        self.best
            .entry(letter.to_ascii_uppercase())
            .and_modify(|best| *best = (*best).max(verdict))
            .or_insert(verdict);
    }

    /// Best verdict for a letter, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Verdict> {
        self.best.get(&letter.to_ascii_uppercase()).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::Session;

    #[test]
    fn stronger_verdict_wins() {
        let mut hints = LetterHints::default();
        hints.record(b'E', Verdict::Present);
        hints.record(b'E', Verdict::Absent);
        assert_eq!(hints.get(b'E'), Some(Verdict::Present));

        hints.record(b'e', Verdict::Correct);
        assert_eq!(hints.get(b'E'), Some(Verdict::Correct));
    }

    #[test]
    fn unguessed_letters_have_no_hint() {
        let hints = LetterHints::default();
        assert!(hints.is_empty());
        assert_eq!(hints.get(b'Q'), None);
    }

    #[test]
    fn hints_follow_scored_rows_only() {
        let mut session = Session::new(Word::new("WORDS").unwrap());
        for ch in "WORLD".chars() {
            session.append_letter(ch).unwrap();
        }
        session.submit_guess().unwrap();
        // In progress, not scored
        session.append_letter('Z').unwrap();

        let hints = LetterHints::from_board(session.board());
        assert_eq!(hints.get(b'W'), Some(Verdict::Correct));
        assert_eq!(hints.get(b'L'), Some(Verdict::Absent));
        assert_eq!(hints.get(b'D'), Some(Verdict::Present));
        assert_eq!(hints.get(b'Z'), None);
    }
}
