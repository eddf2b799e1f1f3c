use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::speed::Speed;

/// Configuration for the game
///
/// Coordinates are in board units; every position is a multiple of
/// `cell_size` and the board is `board_size` units on each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board
    pub board_size: i32,
    /// Side length of one grid cell
    pub cell_size: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Tile column of the head at start; the body trails to the left on row 0
    pub initial_head_tile: i32,
    /// Collisions tolerated before the game ends
    pub ng_limit: u32,
    /// Speed used until the player picks another one
    pub speed: Speed,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 400,
            cell_size: 20,
            initial_snake_length: 3,
            initial_head_tile: 6,
            ng_limit: 10,
            speed: Speed::Normal,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom board geometry
    pub fn new(board_size: i32, cell_size: i32) -> Self {
        Self {
            board_size,
            cell_size,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file; missing fields fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Number of cells along one side of the board
    pub fn tile_count(&self) -> i32 {
        self.board_size / self.cell_size
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell size must be positive, got {}", self.cell_size);
        }
        if self.board_size <= 0 || self.board_size % self.cell_size != 0 {
            bail!(
                "board size {} must be a positive multiple of cell size {}",
                self.board_size,
                self.cell_size
            );
        }
        if self.ng_limit == 0 {
            bail!("NG limit must be at least 1");
        }
        if self.initial_snake_length == 0 {
            bail!("initial snake length must be at least 1");
        }
        let length = i32::try_from(self.initial_snake_length).with_context(|| {
            format!("initial snake length {} is too large", self.initial_snake_length)
        })?;
        let head = self.initial_head_tile;
        if head < 0 || head >= self.tile_count() || length > head + 1 {
            bail!(
                "initial snake (head tile {}, length {}) does not fit a board of {} tiles",
                self.initial_head_tile,
                self.initial_snake_length,
                self.tile_count()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 400);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.tile_count(), 20);
        assert_eq!(config.initial_snake_length, 3);
        assert_eq!(config.ng_limit, 10);
        assert_eq!(config.speed, Speed::Normal);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(300, 15);
        assert_eq!(config.tile_count(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_misaligned_board() {
        assert!(GameConfig::new(410, 20).validate().is_err());
        assert!(GameConfig::new(400, 0).validate().is_err());
    }

    #[test]
    fn test_rejects_snake_that_does_not_fit() {
        let config = GameConfig {
            initial_snake_length: 8,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_head_tile: 20,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            initial_head_tile: i32::MIN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        // Tail exactly on the left edge fits
        let config = GameConfig {
            initial_snake_length: 7,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_length_that_overflows_i32() {
        // 2^32 + 1 would wrap to 1 if truncated
        #[cfg(target_pointer_width = "64")]
        {
            let config: GameConfig =
                serde_json::from_str(r#"{"initial_snake_length": 4294967297}"#).unwrap();
            assert!(config.validate().is_err());
        }

        let config = GameConfig {
            initial_snake_length: i32::MAX as usize + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_ng_limit() {
        let config = GameConfig {
            ng_limit: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"speed": "fast", "ng_limit": 5}"#).unwrap();
        assert_eq!(config.speed, Speed::Fast);
        assert_eq!(config.ng_limit, 5);
        assert_eq!(config.board_size, 400);
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = GameConfig::from_file(Path::new("/nonexistent/ng_snake.json"));
        assert!(result.is_err());
    }
}
