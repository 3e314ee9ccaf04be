//! Token balance invariant: X and O alternate, X first.

use super::super::{GameState, Token};
use super::Invariant;

/// Invariant: the X count equals the O count or exceeds it by one.
pub struct TokenBalanceInvariant;

impl Invariant<GameState> for TokenBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Token::X);
        let o = state.board().count(Token::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Token counts are balanced (X equals O or leads by one)"
    }
}
