//! Prompt-driven play loop.
//!
//! [`GameEngine`] owns one [`GameState`] and talks to the players through a
//! line-oriented reader and a writer: stdin/stdout in the binary, in-memory
//! buffers in tests.

use super::input::parse_cell_choice;
use super::record::{GameRecord, Move};
use super::{GameState, GameStatus, Token};
use crate::config::GameConfig;
use crate::error::{GameError, GameErrorKind, MoveError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Two-player tic-tac-toe engine.
#[derive(Debug)]
pub struct GameEngine<R, W> {
    state: GameState,
    config: GameConfig,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameEngine<R, W> {
    /// Starts a fresh game and prints the empty board.
    #[instrument(skip(input, output))]
    pub fn new(input: R, output: W, config: GameConfig) -> Result<Self, GameError> {
        let mut engine = Self {
            state: GameState::new(),
            config,
            input,
            output,
        };
        info!("Starting new game");
        engine.print_board()?;
        Ok(engine)
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Summarises the game so far.
    pub fn record(&self) -> GameRecord {
        GameRecord::from_state(&self.state)
    }

    /// Consumes the engine, returning the final state and the output sink.
    pub fn into_parts(self) -> (GameState, W) {
        (self.state, self.output)
    }

    /// Whose turn it is.
    pub fn current_turn_token(&self) -> Token {
        self.state.current_turn_token()
    }

    /// Linear indices of the open cells, row-major.
    pub fn open_cells(&self) -> Vec<u8> {
        self.state.open_cells()
    }

    /// Returns false while too few moves have been made for a win.
    pub fn is_winnable(&self) -> bool {
        self.state.is_winnable()
    }

    fn print_board(&mut self) -> Result<(), GameError> {
        let rendered = self.state.board().render(self.config.empty_glyph());
        writeln!(self.output, "{}", rendered)?;
        Ok(())
    }

    /// Asks for a cell until the reply names an open cell.
    ///
    /// Bad replies are dropped and the prompt is repeated; only I/O failure
    /// or end of input ends the loop without a cell.
    #[instrument(skip(self))]
    pub fn choose_cell(&mut self) -> Result<u8, GameError> {
        let open = self.state.open_cells();
        if self.config.show_open_cells() {
            let listing: Vec<String> = open.iter().map(u8::to_string).collect();
            writeln!(self.output, "Available cells are: [{}]", listing.join(" "))?;
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.prompt())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::new(GameErrorKind::InputClosed));
            }

            match parse_cell_choice(&line, &open) {
                Ok(cell) => {
                    debug!(cell, "Cell chosen");
                    return Ok(cell);
                }
                Err(reason) => debug!(%reason, "Rejected cell input"),
            }
        }
    }

    /// Plays one turn: choose a cell, place the current token, reprint.
    #[instrument(skip(self), fields(token = %self.current_turn_token()))]
    pub fn play_token(&mut self) -> Result<Move, GameError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver.into());
        }

        let token = self.state.current_turn_token();
        let cell = self.choose_cell()?;
        let coord = self.state.apply_move(cell)?;
        debug!(%token, cell, %coord, "Token played");

        self.print_board()?;
        Ok(Move::new(token, cell))
    }

    /// Checks the lines through the last move and announces a winner.
    ///
    /// Returns the winning token. Once a win has been announced, further
    /// calls return it again without reprinting.
    #[instrument(skip(self))]
    pub fn check_for_win(&mut self) -> Result<Option<Token>, GameError> {
        if self.state.is_game_over() {
            return Ok(self.state.status().winner());
        }

        match self.state.check_for_win() {
            Some(win) => {
                info!(token = %win.token, line = %win.line, "Game won");
                writeln!(self.output, "{} Wins", win.token)?;
                Ok(Some(win.token))
            }
            None => Ok(None),
        }
    }

    /// Plays turns until someone wins or the board is full.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameStatus, GameError> {
        while self.state.open_cell_count() > 0 && !self.state.is_game_over() {
            self.play_token()?;
            self.check_for_win()?;
        }

        let status = self.state.status();
        if status == GameStatus::Draw {
            info!("Board full with no winner");
            if self.config.announce_draw() {
                writeln!(self.output, "{}", status)?;
            }
        }
        Ok(status)
    }
}
