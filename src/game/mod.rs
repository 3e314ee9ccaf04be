//! Tic-tac-toe on a 3x3 grid.

mod cells;
mod engine;
mod input;
pub mod invariants;
mod record;
pub mod rules;
mod state;
mod types;

pub use cells::CellTable;
pub use engine::GameEngine;
pub use input::{CellInputError, parse_cell_choice};
pub use record::{GameRecord, Move};
pub use state::{GameState, GameStatus};
pub use types::{Board, CELL_COUNT, Coord, SIDE, Token};
