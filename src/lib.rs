//! Two-player tic-tac-toe played at a text prompt.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] runs the prompt/print loop over any reader and writer
//! - **State**: [`GameState`] holds the board, play order, and last move
//! - **Rules**: win lines and the winnable short-circuit in [`rules`]
//! - **Config**: [`GameConfig`] loaded from TOML
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tac_toe::{GameConfig, GameEngine, GameStatus, Token};
//!
//! # fn example() -> Result<(), tac_toe::GameError> {
//! let moves = Cursor::new("1\n4\n2\n5\n3\n");
//! let mut engine = GameEngine::new(moves, Vec::new(), GameConfig::default())?;
//! assert_eq!(engine.play_game()?, GameStatus::Won(Token::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod game;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Errors
pub use error::{GameError, GameErrorKind, MoveError};

// Crate-level exports - Game
pub use game::{
    Board, CELL_COUNT, CellInputError, CellTable, Coord, GameEngine, GameRecord, GameState,
    GameStatus, Move, SIDE, Token, invariants, parse_cell_choice, rules,
};
