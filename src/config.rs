//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Presentation and logging settings for a game.
///
/// Every key is optional in the file; missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// Placeholder printed for empty cells.
    #[getter(skip)]
    empty_glyph: char,

    /// Prompt printed before reading a cell number.
    #[setters(into)]
    prompt: String,

    /// Print the list of open cells before each prompt.
    #[getter(skip)]
    show_open_cells: bool,

    /// Print "Draw" when the board fills without a winner.
    #[getter(skip)]
    announce_draw: bool,

    /// Log filter used when `RUST_LOG` is unset.
    #[setters(into)]
    log_level: String,

    /// Write logs to this file instead of stderr.
    #[setters(strip_option)]
    log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            empty_glyph: '-',
            prompt: "Cell? ".to_string(),
            show_open_cells: true,
            announce_draw: false,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Placeholder printed for empty cells.
    pub fn empty_glyph(&self) -> char {
        self.empty_glyph
    }

    /// Whether to list open cells before each prompt.
    pub fn show_open_cells(&self) -> bool {
        self.show_open_cells
    }

    /// Whether to announce a full board with no winner.
    pub fn announce_draw(&self) -> bool {
        self.announce_draw
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.empty_glyph.is_whitespace() {
            return Err(ConfigError::new(
                "empty_glyph must be a visible character".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
