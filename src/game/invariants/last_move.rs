//! Last-move invariant: the recorded last token and coordinate match the
//! play order.

use super::super::{GameState, Token};
use super::Invariant;

/// Invariant: `last_token` and `last_coord` describe the final play-order entry.
pub struct LastMoveInvariant;

impl Invariant<GameState> for LastMoveInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(index) = state.last_cell_played() else {
            return state.last_token().is_none() && state.last_coord().is_none();
        };

        let expected_token = if state.play_order().len() % 2 == 1 {
            Token::X
        } else {
            Token::O
        };

        match (state.last_token(), state.last_coord()) {
            (Some(token), Some(coord)) => {
                token == expected_token
                    && state.cells().coord(index) == Ok(coord)
                    && state.board().get(coord) == Some(token)
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Last token and coordinate match the play order"
    }
}
