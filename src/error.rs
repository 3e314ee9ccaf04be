//! Error types for the game engine.

use crate::game::{Coord, Token};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error that can occur when applying a move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell already holds a token.
    #[display("Cell {} is already occupied by {}", _0, _1)]
    CellOccupied(Coord, Token),

    /// The linear index does not name a cell (must be 1-9).
    #[display("Cell {} does not exist", _0)]
    CellOutOfRange(u8),

    /// The coordinate lies off the board.
    #[display("Coordinate {} is off the board", _0)]
    CoordOutOfRange(Coord),

    /// The game has already been won or the board is full.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Kinds of failure surfaced by the engine.
#[derive(Debug, Display)]
pub enum GameErrorKind {
    /// Reading the prompt or writing the board failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),

    /// Input ended before a valid cell was chosen.
    #[display("Input closed before a cell was chosen")]
    InputClosed,

    /// A move was refused.
    #[display("Move refused: {}", _0)]
    Move(MoveError),
}

/// Game engine error with location tracking.
#[derive(Debug, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<std::io::Error> for GameError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(GameErrorKind::Io(err))
    }
}

impl From<MoveError> for GameError {
    #[track_caller]
    fn from(err: MoveError) -> Self {
        Self::new(GameErrorKind::Move(err))
    }
}
