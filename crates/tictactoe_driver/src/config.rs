//! Probe configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe::{Action, Board};
use tracing::{debug, info, instrument};

/// Position and action exercised by the `probe` command.
///
/// ```toml
/// board = "XOX/XOX/O.O"
/// action = [2, 1]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Board in `XOX/XOX/O.O` text format.
    #[serde(default = "default_board")]
    board: String,

    /// Action as `[row, col]`.
    #[serde(default = "default_action")]
    action: [usize; 2],
}

#[instrument]
fn default_board() -> String {
    "XOX/XOX/O.O".to_string()
}

#[instrument]
fn default_action() -> [usize; 2] {
    [2, 1]
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            board: default_board(),
            action: default_action(),
        }
    }
}

impl ProbeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading probe config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(board = %config.board, action = ?config.action, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the board and action to probe, letting command-line values
    /// take precedence over the file.
    #[instrument(skip(self))]
    pub fn resolve(
        &self,
        board: Option<Board>,
        action: Option<Action>,
    ) -> Result<(Board, Action), ConfigError> {
        let board = match board {
            Some(board) => board,
            None => self
                .board
                .parse()
                .map_err(|e| ConfigError::new(format!("Invalid board {:?}: {}", self.board, e)))?,
        };
        let [row, col] = self.action;
        Ok((board, action.unwrap_or(Action::new(row, col))))
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
