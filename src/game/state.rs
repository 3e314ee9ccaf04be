//! Game state and the pure operations on it.

use super::cells::CellTable;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{self, Win};
use super::types::{Board, CELL_COUNT, Coord, Token};
use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} Wins", _0)]
    Won(Token),
    /// Board filled with no winner.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Token> {
        match self {
            GameStatus::Won(token) => Some(*token),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// Whose turn it is is never stored: X moves whenever an odd number of
/// cells is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) cells: CellTable,
    pub(crate) board: Board,
    pub(crate) play_order: Vec<u8>,
    pub(crate) last_token: Option<Token>,
    pub(crate) last_coord: Option<Coord>,
    pub(crate) game_over: bool,
    pub(crate) win: Option<Win>,
}

impl GameState {
    /// Creates an empty game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            cells: CellTable::new(),
            board: Board::new(),
            play_order: Vec::with_capacity(CELL_COUNT),
            last_token: None,
            last_coord: None,
            game_over: false,
            win: None,
        }
    }

    /// Rebuilds a game by playing the given cells in order.
    ///
    /// Each move is checked for a win as it is played. Cells listed after a
    /// winning move make this return `MoveError::GameOver`.
    #[instrument]
    pub fn replay(cells: &[u8]) -> Result<Self, MoveError> {
        let mut state = Self::new();
        for cell in cells {
            state.apply_move(*cell)?;
            state.check_for_win();
        }
        Ok(state)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the index/coordinate table.
    pub fn cells(&self) -> &CellTable {
        &self.cells
    }

    /// Returns the cells played so far, in order.
    pub fn play_order(&self) -> &[u8] {
        &self.play_order
    }

    /// Returns the last cell played, if any.
    pub fn last_cell_played(&self) -> Option<u8> {
        self.play_order.last().copied()
    }

    /// Returns the token of the last move.
    pub fn last_token(&self) -> Option<Token> {
        self.last_token
    }

    /// Returns the coordinate of the last move.
    pub fn last_coord(&self) -> Option<Coord> {
        self.last_coord
    }

    /// Returns true once a win has been detected.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the completed line, if any.
    pub fn win(&self) -> Option<Win> {
        self.win
    }

    /// Number of empty cells.
    pub fn open_cell_count(&self) -> usize {
        CELL_COUNT - self.board.played()
    }

    /// Linear indices of every empty cell, row-major.
    pub fn open_cells(&self) -> Vec<u8> {
        self.cells
            .iter()
            .filter(|(_, coord)| self.board.is_empty(*coord))
            .map(|(index, _)| index)
            .collect()
    }

    /// Whose turn it is: X when an odd number of cells is open, O when even.
    pub fn current_turn_token(&self) -> Token {
        if self.open_cell_count() % 2 == 1 {
            Token::X
        } else {
            Token::O
        }
    }

    /// Returns false while too many cells are open for anyone to have won.
    pub fn is_winnable(&self) -> bool {
        rules::is_winnable(self.open_cell_count())
    }

    /// Derives the game status.
    ///
    /// A full board is terminal even when `check_for_win` was never called:
    /// it reports any completed line as a win, otherwise a draw.
    pub fn status(&self) -> GameStatus {
        match self.win {
            Some(win) => GameStatus::Won(win.token),
            None if rules::is_draw(&self.board) => GameStatus::Draw,
            None if self.board.is_full() => rules::check_winner(&self.board)
                .map_or(GameStatus::Draw, |win| GameStatus::Won(win.token)),
            None => GameStatus::InProgress,
        }
    }

    /// Places the current turn token on the cell with the given linear index.
    ///
    /// Returns the coordinate played.
    #[instrument(skip(self), fields(token = %self.current_turn_token()))]
    pub fn apply_move(&mut self, index: u8) -> Result<Coord, MoveError> {
        if self.game_over || self.open_cell_count() == 0 {
            return Err(MoveError::GameOver);
        }

        let token = self.current_turn_token();
        let coord = self.cells.coord(index)?;
        self.board.place(coord, token)?;

        self.play_order.push(index);
        self.last_token = Some(token);
        self.last_coord = Some(coord);
        debug!(%token, %coord, open = self.open_cell_count(), "Move applied");

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "invariants violated after move {}",
            index
        );

        Ok(coord)
    }

    /// Looks for three in a line through the last move.
    ///
    /// Skipped while the game is not yet winnable. On a win the game is over.
    #[instrument(skip(self))]
    pub fn check_for_win(&mut self) -> Option<Win> {
        if !self.is_winnable() {
            return None;
        }
        let last = self.last_coord?;

        let win = rules::check_win_through(&self.board, last)?;
        debug!(token = %win.token, line = %win.line, "Line completed");
        self.win = Some(win);
        self.game_over = true;
        Some(win)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
