//! Application configuration loaded from TOML.
//!
//! ```toml
//! [engine]
//! search = "alpha-beta"
//!
//! [board]
//! rows = 3
//! cols = 3
//! run = 3
//!
//! [players]
//! x = "human"
//! o = "engine"
//! x_name = "Player 1"
//! o_name = "Player 2"
//! ```
//!
//! Every key is optional; missing keys take the defaults shown above,
//! except `search`, which defaults to `exhaustive`.

use crate::game::Geometry;
use crate::search::SearchMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who makes the moves for a side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed at the terminal.
    Human,
    /// Moves chosen by search.
    Engine,
}

/// Full configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Search settings.
    engine: EngineSection,
    /// Board shape.
    board: BoardSection,
    /// Who plays each side.
    players: PlayersSection,
}

/// `[engine]` table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct EngineSection {
    /// Search algorithm.
    search: SearchMode,
}

/// `[board]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSection {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    cols: usize,
    /// Marks in a line needed to win.
    run: usize,
}

impl Default for BoardSection {
    fn default() -> Self {
        let standard = Geometry::STANDARD;
        Self {
            rows: standard.rows(),
            cols: standard.cols(),
            run: standard.run(),
        }
    }
}

impl BoardSection {
    /// Validates the table into a geometry.
    pub fn geometry(&self) -> Result<Geometry, ConfigError> {
        Geometry::new(self.rows, self.cols, self.run)
            .map_err(|e| ConfigError::new(format!("Invalid [board] table: {}", e)))
    }
}

/// `[players]` table.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct PlayersSection {
    /// Who plays X.
    x: PlayerKind,
    /// Who plays O.
    o: PlayerKind,
    /// Display name for X.
    #[setters(into)]
    x_name: String,
    /// Display name for O.
    #[setters(into)]
    o_name: String,
}

impl Default for PlayersSection {
    fn default() -> Self {
        Self {
            x: PlayerKind::Human,
            o: PlayerKind::Engine,
            x_name: "Player 1".to_string(),
            o_name: "Player 2".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(search = %config.engine.search, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.board.geometry()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
