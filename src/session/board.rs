//! Board storage: six rows of five cells
//!
//! Rows are filled left to right and frozen once scored. The board is the
//! only source of truth for letters; renderers read from it and never write.

use crate::core::{Feedback, Verdict, WORD_LENGTH, Word};

/// Number of rows (guesses) on a board
pub const MAX_ROWS: usize = 6;

/// One tile: an optional letter and, once its row is scored, a verdict
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    letter: Option<u8>,
    verdict: Option<Verdict>,
}

impl Cell {
    /// The stored uppercase letter, if any
    #[inline]
    #[must_use]
    pub const fn letter(self) -> Option<u8> {
        self.letter
    }

    /// The letter as a `char`, if any
    #[must_use]
    pub fn letter_char(self) -> Option<char> {
        self.letter.map(char::from)
    }

    /// The verdict, set only after the row is submitted
    #[inline]
    #[must_use]
    pub const fn verdict(self) -> Option<Verdict> {
        self.verdict
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.letter.is_none()
    }
}

/// A row mutation was refused because the row has already been scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLocked;

/// One guess attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
    feedback: Option<Feedback>,
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    /// Get a cell (0-4)
    ///
    /// # Panics
    /// Panics if tile >= 5
    #[must_use]
    pub const fn cell(&self, tile: usize) -> Cell {
        self.cells[tile]
    }

    /// Feedback for this row, once submitted
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.feedback.is_some()
    }

    /// Number of cells holding a letter
    #[must_use]
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Letters typed so far, left to right
    #[must_use]
    pub fn text(&self) -> String {
        self.cells.iter().filter_map(|c| c.letter_char()).collect()
    }

    /// Read the row back as a Word, if every cell is filled
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [0u8; WORD_LENGTH];
        for (slot, cell) in letters.iter_mut().zip(&self.cells) {
            *slot = cell.letter?;
        }
        Some(Word::from_letters(letters))
    }

    pub(crate) fn write(&mut self, tile: usize, letter: u8) -> Result<(), RowLocked> {
        if self.is_submitted() {
            return Err(RowLocked);
        }
        self.cells[tile].letter = Some(letter);
        Ok(())
    }

    pub(crate) fn clear(&mut self, tile: usize) -> Result<(), RowLocked> {
        if self.is_submitted() {
            return Err(RowLocked);
        }
        self.cells[tile].letter = None;
        Ok(())
    }

    /// Apply verdicts and freeze the row
    pub(crate) fn score(&mut self, feedback: Feedback) -> Result<(), RowLocked> {
        if self.is_submitted() {
            return Err(RowLocked);
        }
        for (cell, verdict) in self.cells.iter_mut().zip(feedback.verdicts()) {
            cell.verdict = Some(verdict);
        }
        self.feedback = Some(feedback);
        Ok(())
    }
}

/// Fixed grid of rows, created once per session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_ROWS],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_ROWS] {
        &self.rows
    }

    /// Get a row (0-5)
    ///
    /// # Panics
    /// Panics if index >= 6
    #[must_use]
    pub const fn row(&self, index: usize) -> &Row {
        &self.rows[index]
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    /// Iterate over scored rows with their guesses
    pub fn submitted(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.rows
            .iter()
            .filter_map(|row| Some((row.word()?, row.feedback()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row(text: &str) -> Row {
        let mut row = Row::default();
        for (i, b) in text.bytes().enumerate() {
            row.write(i, b).unwrap();
        }
        row
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.rows().len(), MAX_ROWS);
        for row in board.rows() {
            assert_eq!(row.filled(), 0);
            assert!(!row.is_submitted());
            assert!(row.cells().iter().all(|c| c.verdict().is_none()));
        }
    }

    #[test]
    fn row_word_requires_all_cells() {
        let row = filled_row("WOR");
        assert_eq!(row.text(), "WOR");
        assert_eq!(row.filled(), 3);
        assert!(row.word().is_none());

        let row = filled_row("WORDS");
        assert_eq!(row.word(), Word::new("WORDS").ok());
    }

    #[test]
    fn scored_row_is_frozen() {
        let mut row = filled_row("WORDS");
        row.score(Feedback::PERFECT).unwrap();

        assert!(row.is_submitted());
        assert_eq!(row.cell(0).verdict(), Some(Verdict::Correct));
        assert_eq!(row.write(0, b'X'), Err(RowLocked));
        assert_eq!(row.clear(4), Err(RowLocked));
        assert_eq!(row.score(Feedback::PERFECT), Err(RowLocked));
        assert_eq!(row.text(), "WORDS");
    }

    #[test]
    fn clear_empties_a_cell() {
        let mut row = filled_row("WO");
        row.clear(1).unwrap();
        assert_eq!(row.text(), "W");
        assert!(row.cell(1).is_empty());
    }

    #[test]
    fn submitted_lists_scored_rows_only() {
        let mut board = Board::new();
        for (i, b) in b"WORDS".iter().enumerate() {
            board.row_mut(0).write(i, *b).unwrap();
        }
        board.row_mut(0).score(Feedback::PERFECT).unwrap();
        board.row_mut(1).write(0, b'A').unwrap();

        let scored: Vec<_> = board.submitted().collect();
        assert_eq!(scored.len(), 1);
        assert_eq!(scored[0].0.text(), "WORDS");
    }
}
