//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameState, Token};
use super::Invariant;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the play order onto an empty board must place every token on
/// an empty cell and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();
        let mut token = Token::X;

        for index in state.play_order() {
            let Ok(coord) = state.cells().coord(*index) else {
                return false;
            };
            // place() refuses occupied cells
            if reconstructed.place(coord, token).is_err() {
                return false;
            }
            token = token.opponent();
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
