//! Game session: board storage and the intent-driven state machine

mod board;
mod hints;
mod state;

pub use board::{Board, Cell, MAX_ROWS, Row};
pub use hints::LetterHints;
pub use state::{GameStatus, Intent, IntentResult, Rejection, Session, SessionEvent};
