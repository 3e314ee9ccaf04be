//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full with no completed line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Coord, Token};
    use super::*;

    fn fill(layout: [[Token; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (row, tokens) in layout.iter().enumerate() {
            for (col, token) in tokens.iter().enumerate() {
                board.place(Coord::new(row, col), *token).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        use Token::{O, X};
        // X O X / X O O / O X X
        let board = fill([[X, O, X], [X, O, O], [O, X, X]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        use Token::{O, X};
        // X X X / O O X / X O O
        let board = fill([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(!is_draw(&board));
    }
}
