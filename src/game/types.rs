//! Core domain types for tic-tac-toe.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Token placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Token {
    /// Token X (always moves first).
    #[display("X")]
    X,
    /// Token O (moves second).
    #[display("O")]
    O,
}

impl Token {
    /// Returns the other token.
    pub fn opponent(self) -> Self {
        match self {
            Token::X => Token::O,
            Token::O => Token::X,
        }
    }
}

/// A 0-indexed (row, column) coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row, 0 at the top.
    pub row: usize,
    /// Column, 0 at the left.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from empty to occupied; [`Board::place`] refuses to
/// touch an occupied cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Token>; SIDE]; SIDE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the token at the given coordinate, `None` when empty or off the board.
    pub fn get(&self, coord: Coord) -> Option<Token> {
        self.cells
            .get(coord.row)
            .and_then(|row| row.get(coord.col))
            .copied()
            .flatten()
    }

    /// Checks if the cell at the coordinate is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.row < SIDE && coord.col < SIDE && self.cells[coord.row][coord.col].is_none()
    }

    /// Places a token on an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, coord: Coord, token: Token) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(MoveError::CoordOutOfRange(coord))?;

        if let Some(existing) = *cell {
            return Err(MoveError::CellOccupied(coord, existing));
        }

        *cell = Some(token);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn cells_mut(&mut self) -> &mut [[Option<Token>; SIDE]; SIDE] {
        &mut self.cells
    }

    /// Returns one row of the board, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<[Option<Token>; SIDE]> {
        self.cells.get(row).copied()
    }

    /// Returns one column of the board, or `None` past the last column.
    pub fn column(&self, col: usize) -> Option<[Option<Token>; SIDE]> {
        (col < SIDE).then(|| [self.cells[0][col], self.cells[1][col], self.cells[2][col]])
    }

    /// Top-left to bottom-right diagonal.
    pub fn main_diagonal(&self) -> [Option<Token>; SIDE] {
        [self.cells[0][0], self.cells[1][1], self.cells[2][2]]
    }

    /// Top-right to bottom-left diagonal.
    pub fn anti_diagonal(&self) -> [Option<Token>; SIDE] {
        [self.cells[0][2], self.cells[1][1], self.cells[2][0]]
    }

    /// Number of cells holding the given token.
    pub fn count(&self, token: Token) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(token))
            .count()
    }

    /// Number of occupied cells.
    pub fn played(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.played() == CELL_COUNT
    }

    /// Formats the board one row per line, cells separated by a space.
    pub fn render(&self, empty_glyph: char) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Some(token) => token.to_string(),
                        None => empty_glyph.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render('-'))
    }
}
