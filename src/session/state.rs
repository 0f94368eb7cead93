//! Session state machine
//!
//! A session owns the target word and the board, and accepts three intents:
//! append a letter, delete the last letter, submit the row. Every intent runs
//! to completion before the next one; a rejected intent never changes state.

use super::board::{Board, MAX_ROWS, Row, RowLocked};
use crate::core::{Feedback, WORD_LENGTH, Word, normalize_letter};
use thiserror::Error;
use tracing::{debug, info};

/// Discrete player intents delivered by an input collector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    AppendLetter(char),
    DeleteLetter,
    SubmitGuess,
}

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why an intent was refused
///
/// None of these are fatal. The session is unchanged after every rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Row is full. Press Enter to submit your guess.")]
    RowFull,
    #[error("Nothing to delete")]
    RowEmpty,
    #[error("Not enough letters")]
    RowIncomplete,
    #[error("Game is over. Start a new game to play again.")]
    GameAlreadyOver,
    #[error("{0:?} is not a letter")]
    InvalidLetter(char),
    #[error("Row {0} has already been scored")]
    RowLocked(usize),
}

impl Rejection {
    /// Whether the player should be told about this rejection
    ///
    /// Deleting from an empty row is a silent no-op.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        !matches!(self, Self::RowEmpty)
    }
}

/// What an accepted intent did, for renderers and logs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LetterAppended { row: usize, tile: usize, letter: char },
    LetterDeleted { row: usize, tile: usize },
    /// A guess was scored and play moves to the next row
    GuessScored { row: usize, feedback: Feedback },
    /// The guess matched the target
    Won { row: usize, feedback: Feedback },
    /// The last row was used up; the target is disclosed
    Lost { feedback: Feedback, target: Word },
}

impl SessionEvent {
    /// Whether this event ended the session
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won { .. } | Self::Lost { .. })
    }
}

/// Result of applying one intent
pub type IntentResult = Result<SessionEvent, Rejection>;

/// One play-through: up to six guesses at a fixed target
///
/// # Examples
/// ```
/// use wordle_tiles::core::Word;
/// use wordle_tiles::session::{GameStatus, Session};
///
/// let mut session = Session::new(Word::new("words").unwrap());
/// for ch in "words".chars() {
///     session.append_letter(ch).unwrap();
/// }
/// let event = session.submit_guess().unwrap();
///
/// assert!(event.is_terminal());
/// assert_eq!(session.status(), GameStatus::Won);
/// assert_eq!(session.current_row(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    target: Word,
    board: Board,
    current_row: usize,
    current_tile: usize,
    status: GameStatus,
}

impl Session {
    #[must_use]
    pub fn new(target: Word) -> Self {
        info!("session started");
        debug!(target_word = %target, "target chosen");
        Self {
            target,
            board: Board::new(),
            current_row: 0,
            current_tile: 0,
            status: GameStatus::Playing,
        }
    }

    /// Dispatch an intent to its handler
    ///
    /// # Errors
    /// Returns the `Rejection` explaining why the intent was refused.
    pub fn apply(&mut self, intent: Intent) -> IntentResult {
        match intent {
            Intent::AppendLetter(ch) => self.append_letter(ch),
            Intent::DeleteLetter => self.delete_letter(),
            Intent::SubmitGuess => self.submit_guess(),
        }
    }

    /// Write a letter into the next empty tile of the current row
    ///
    /// The letter is stored uppercase.
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the session has ended
    /// - `InvalidLetter` if `ch` is not an ASCII letter
    /// - `RowFull` if all five tiles are filled
    pub fn append_letter(&mut self, ch: char) -> IntentResult {
        debug!(letter = %ch, "append letter");
        self.ensure_playing()?;

        let letter = normalize_letter(ch).ok_or(Rejection::InvalidLetter(ch));
        let letter = Self::logged(letter)?;
        if self.current_tile == WORD_LENGTH {
            return Self::logged(Err(Rejection::RowFull));
        }

        let (row, tile) = (self.current_row, self.current_tile);
        Self::logged(self.board.row_mut(row).write(tile, letter).map_err(locked(row)))?;
        self.current_tile += 1;

        debug!(row, tile, current_word = %self.current_word(), "letter added");
        Ok(SessionEvent::LetterAppended {
            row,
            tile,
            letter: char::from(letter),
        })
    }

    /// Clear the last filled tile of the current row
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the session has ended
    /// - `RowEmpty` if there is nothing to delete
    pub fn delete_letter(&mut self) -> IntentResult {
        debug!("delete letter");
        self.ensure_playing()?;

        if self.current_tile == 0 {
            return Self::logged(Err(Rejection::RowEmpty));
        }

        let (row, tile) = (self.current_row, self.current_tile - 1);
        Self::logged(self.board.row_mut(row).clear(tile).map_err(locked(row)))?;
        self.current_tile = tile;

        debug!(row, tile, current_word = %self.current_word(), "letter deleted");
        Ok(SessionEvent::LetterDeleted { row, tile })
    }

    /// Score the current row and advance or finish
    ///
    /// # Errors
    /// - `GameAlreadyOver` once the session has ended
    /// - `RowIncomplete` if the row is not completely filled
    pub fn submit_guess(&mut self) -> IntentResult {
        debug!(current_word = %self.current_word(), "submit guess");
        self.ensure_playing()?;

        let row = self.current_row;
        let guess = match self.board.row(row).word() {
            Some(guess) if self.current_tile == WORD_LENGTH => guess,
            _ => return Self::logged(Err(Rejection::RowIncomplete)),
        };

        let feedback = Feedback::evaluate(&guess, &self.target);
        Self::logged(self.board.row_mut(row).score(feedback).map_err(locked(row)))?;
        debug!(row, guess = %guess, feedback = %feedback, "guess scored");

        if guess == self.target {
            self.status = GameStatus::Won;
            info!(row, guesses = row + 1, "game won");
            return Ok(SessionEvent::Won { row, feedback });
        }

        self.current_row += 1;
        self.current_tile = 0;

        if self.current_row == MAX_ROWS {
            self.status = GameStatus::Lost;
            info!(target_word = %self.target, "game lost");
            return Ok(SessionEvent::Lost {
                feedback,
                target: self.target,
            });
        }

        Ok(SessionEvent::GuessScored { row, feedback })
    }

    fn ensure_playing(&self) -> Result<(), Rejection> {
        if self.status.is_over() {
            return Self::logged(Err(Rejection::GameAlreadyOver));
        }
        Ok(())
    }

    /// Log a rejection on its way out
    ///
    /// Front ends show visible rejections to the player, so these stay at
    /// debug level.
    fn logged<T>(result: Result<T, Rejection>) -> Result<T, Rejection> {
        if let Err(rejection) = &result {
            debug!(%rejection, visible = rejection.is_visible(), "intent rejected");
        }
        result
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Index of the row being filled (0-5), or 6 after a loss
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    /// Index of the next empty tile in the current row (0-5)
    #[must_use]
    pub const fn current_tile(&self) -> usize {
        self.current_tile
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Get a row (0-5)
    ///
    /// # Panics
    /// Panics if index >= 6, which includes `current_row()` after a loss
    #[must_use]
    pub const fn row(&self, index: usize) -> &Row {
        self.board.row(index)
    }

    /// Number of guesses scored so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        match self.status {
            GameStatus::Won => self.current_row + 1,
            _ => self.current_row,
        }
    }

    /// The target word once the session has ended
    #[must_use]
    pub const fn revealed_target(&self) -> Option<Word> {
        if self.status.is_over() {
            Some(self.target)
        } else {
            None
        }
    }

    /// Letters typed into the row in progress
    ///
    /// Read from the board, so it always matches what was accepted.
    #[must_use]
    pub fn current_word(&self) -> String {
        if self.current_row < MAX_ROWS {
            self.board.row(self.current_row).text()
        } else {
            String::new()
        }
    }
}

fn locked(row: usize) -> impl Fn(RowLocked) -> Rejection {
    move |RowLocked| Rejection::RowLocked(row)
}
