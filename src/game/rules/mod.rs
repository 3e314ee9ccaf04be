//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); the engine decides when to
//! call them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Line, MAX_OPEN_FOR_WIN, Win, check_win_through, check_winner, is_winnable};
