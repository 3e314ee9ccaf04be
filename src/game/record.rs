//! Post-game summary.

use super::rules::Line;
use super::{GameState, GameStatus, Token};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A token placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{token} -> {cell}")]
pub struct Move {
    /// The token placed.
    pub token: Token,
    /// Linear index of the cell (1-9).
    pub cell: u8,
}

impl Move {
    /// Creates a new move.
    pub fn new(token: Token, cell: u8) -> Self {
        Self { token, cell }
    }
}

/// Serializable record of a finished (or abandoned) game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Every move in order.
    pub moves: Vec<Move>,
    /// Final status.
    pub status: GameStatus,
    /// Completed line, when the game was won.
    pub winning_line: Option<Line>,
    /// Final board, one row per line.
    pub board: String,
}

impl GameRecord {
    /// Summarises a game state.
    #[instrument(skip(state))]
    pub fn from_state(state: &GameState) -> Self {
        let moves = state
            .play_order()
            .iter()
            // X always moves first, so tokens alternate from X.
            .zip(Token::iter().cycle())
            .map(|(cell, token)| Move::new(token, *cell))
            .collect();

        Self {
            moves,
            status: state.status(),
            winning_line: state.win().map(|win| win.line),
            board: state.board().to_string(),
        }
    }

    /// One line per move followed by the outcome.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (turn, mv) in self.moves.iter().enumerate() {
            text.push_str(&format!("{:>2}. {}\n", turn + 1, mv));
        }
        match self.winning_line {
            Some(line) => text.push_str(&format!("{} ({})", self.status, line)),
            None => text.push_str(&self.status.to_string()),
        }
        text
    }
}
