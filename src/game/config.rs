use std::{fs, path::Path, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::Position;

/// Largest board `validate` accepts
pub const MAX_BOARD_SIZE: usize = 256;

/// Problems with a configuration file or its values
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("board_size must be at least 1")]
    ZeroBoardSize,
    #[error("board_size {0} exceeds the maximum of {MAX_BOARD_SIZE}")]
    BoardTooLarge(usize),
    #[error("tick_period_ms must be positive")]
    ZeroTickPeriod,
    #[error("{what} ({x}, {y}) lies outside a {board_size}x{board_size} board")]
    OutOfBounds {
        what: &'static str,
        x: i32,
        y: i32,
        board_size: usize,
    },
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square board
    pub board_size: usize,
    /// Milliseconds between ticks
    pub tick_period_ms: u64,
    /// Where the one-segment snake starts after every reset
    pub start: Position,
    /// Food position of the very first game; resets always randomize it
    pub initial_food: Position,
    /// Seed for food placement; entropy when absent
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 12,
            tick_period_ms: 300,
            start: Position::new(5, 5),
            initial_food: Position::new(2, 2),
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Check the preconditions the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroBoardSize);
        }

        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge(self.board_size));
        }

        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }

        for (what, pos) in [("start", self.start), ("initial_food", self.initial_food)] {
            if !pos.is_within(self.board_size) {
                return Err(ConfigError::OutOfBounds {
                    what,
                    x: pos.x,
                    y: pos.y,
                    board_size: self.board_size,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 12);
        assert_eq!(config.tick_period(), Duration::from_millis(300));
        assert_eq!(config.start, Position::new(5, 5));
        assert_eq!(config.initial_food, Position::new(2, 2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(matches!(
            GameConfig::new(0).validate(),
            Err(ConfigError::ZeroBoardSize)
        ));

        let config = GameConfig {
            tick_period_ms: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTickPeriod)));
    }

    #[test]
    fn test_oversized_board_rejected() {
        assert!(GameConfig::new(MAX_BOARD_SIZE).validate().is_ok());

        let err = GameConfig::new(MAX_BOARD_SIZE + 1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::BoardTooLarge(257)));

        assert!(matches!(
            GameConfig::new(1usize << 32).validate(),
            Err(ConfigError::BoardTooLarge(_))
        ));
    }

    #[test]
    fn test_start_must_fit_board() {
        let err = GameConfig::new(5).validate().unwrap_err();
        assert!(matches!(err, ConfigError::OutOfBounds { what: "start", .. }));
        assert_eq!(err.to_string(), "start (5, 5) lies outside a 5x5 board");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "board_size": 20, "rng_seed": 42 }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.board_size, 20);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.tick_period_ms, 300);
    }

    #[test]
    fn test_load_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            GameConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            GameConfig::load(&missing),
            Err(ConfigError::Io { .. })
        ));
    }
}
