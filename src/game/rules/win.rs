//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coord, SIDE, Token};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// With more open cells than this, win checks are skipped.
///
/// X needs three placements and O moves in between, so no line can be
/// complete before the fifth move.
pub const MAX_OPEN_FOR_WIN: usize = 5;

/// A line of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// A row, 0 at the top.
    #[display("row {}", _0)]
    Row(usize),
    /// A column, 0 at the left.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Every line on the board.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..SIDE)
            .map(Line::Row)
            .chain((0..SIDE).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// The four lines that can be completed by a move at `coord`: its row, its
    /// column, and both diagonals.
    pub fn through(coord: Coord) -> [Line; 4] {
        [
            Line::Row(coord.row),
            Line::Column(coord.col),
            Line::MainDiagonal,
            Line::AntiDiagonal,
        ]
    }

    /// Reads the three cells of this line, or `None` for a row or column
    /// off the board.
    pub fn cells(self, board: &Board) -> Option<[Option<Token>; SIDE]> {
        match self {
            Line::Row(row) => board.row(row),
            Line::Column(col) => board.column(col),
            Line::MainDiagonal => Some(board.main_diagonal()),
            Line::AntiDiagonal => Some(board.anti_diagonal()),
        }
    }

    /// Returns the token filling all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Token> {
        match self.cells(board)? {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some(a),
            _ => None,
        }
    }
}

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Win {
    /// Token owning the line.
    pub token: Token,
    /// Which line was completed.
    pub line: Line,
}

/// Checks whether a win is possible with this many open cells.
pub fn is_winnable(open_cells: usize) -> bool {
    open_cells <= MAX_OPEN_FOR_WIN
}

/// Checks the row and column through the last move, plus both diagonals.
#[instrument(skip(board))]
pub fn check_win_through(board: &Board, last: Coord) -> Option<Win> {
    for line in Line::through(last) {
        if let Some(token) = line.owner(board) {
            return Some(Win { token, line });
        }
        trace!(%line, "line not complete");
    }
    None
}

/// Checks every line on the board.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Win> {
    Line::all().find_map(|line| line.owner(board).map(|token| Win { token, line }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(token: Token, coords: &[Coord]) -> Board {
        let mut board = Board::new();
        for coord in coords {
            board.place(*coord, token).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(check_win_through(&board, Coord::new(1, 1)), None);
    }

    #[test]
    fn test_every_line_for_both_tokens() {
        for token in Token::iter() {
            for line in Line::all() {
                let coords: Vec<Coord> = match line {
                    Line::Row(r) => (0..SIDE).map(|c| Coord::new(r, c)).collect(),
                    Line::Column(c) => (0..SIDE).map(|r| Coord::new(r, c)).collect(),
                    Line::MainDiagonal => (0..SIDE).map(|i| Coord::new(i, i)).collect(),
                    Line::AntiDiagonal => (0..SIDE).map(|i| Coord::new(i, SIDE - 1 - i)).collect(),
                };
                let board = board_with(token, &coords);
                let last = coords[SIDE - 1];

                assert_eq!(
                    check_win_through(&board, last),
                    Some(Win { token, line }),
                    "{} should win on {}",
                    token,
                    line
                );
                assert_eq!(check_winner(&board).map(|win| win.token), Some(token));
            }
        }
    }

    #[test]
    fn test_diagonal_found_from_off_diagonal_move() {
        let mut board = board_with(
            Token::O,
            &[Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)],
        );
        board.place(Coord::new(1, 0), Token::X).unwrap();

        let win = check_win_through(&board, Coord::new(1, 0)).unwrap();
        assert_eq!(win.line, Line::AntiDiagonal);
        assert_eq!(win.token, Token::O);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Token::X, &[Coord::new(0, 0), Coord::new(0, 1)]);
        board.place(Coord::new(0, 2), Token::O).unwrap();
        assert_eq!(check_win_through(&board, Coord::new(0, 2)), None);
    }

    #[test]
    fn test_winnable_boundary() {
        assert!(!is_winnable(9));
        assert!(!is_winnable(6));
        assert!(is_winnable(5));
        assert!(is_winnable(4));
        assert!(is_winnable(0));
    }

    #[test]
    fn test_line_off_the_board_has_no_owner() {
        let board = board_with(
            Token::X,
            &[Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)],
        );
        assert_eq!(Line::Row(0).owner(&board), Some(Token::X));
        assert_eq!(Line::Row(SIDE).owner(&board), None);
        assert_eq!(Line::Column(SIDE).cells(&board), None);
    }
}
