//! Session configuration.
//!
//! A [`GameConfig`] is handed to [`crate::GameState`] at creation time. Nothing
//! here is global: two sessions with different configs can coexist.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    Color, Difficulty, DEFAULT_COLORS_ON_FIELD, DEFAULT_ITEMS_IN_LINE, DEFAULT_MOVE_STEP_MS,
    DEFAULT_SPAWN_PER_TURN, MAX_BOARD_SIDE,
};

/// Board size, rule tunables and presentation defaults, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    /// Overrides the difficulty width when set.
    pub width: Option<u8>,
    /// Overrides the difficulty height when set.
    pub height: Option<u8>,
    pub colors_on_field: u8,
    pub spawn_per_turn: u8,
    pub items_in_line: u8,
    /// Whether spawn targets start out visible.
    pub show_next_colors: bool,
    pub move_step_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            width: None,
            height: None,
            colors_on_field: DEFAULT_COLORS_ON_FIELD,
            spawn_per_turn: DEFAULT_SPAWN_PER_TURN,
            items_in_line: DEFAULT_ITEMS_IN_LINE,
            show_next_colors: true,
            move_step_ms: DEFAULT_MOVE_STEP_MS,
        }
    }
}

impl GameConfig {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }

    /// `(width, height)` after applying overrides.
    pub fn dimensions(&self) -> (u8, u8) {
        let (w, h) = self.difficulty.dimensions();
        (self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check that every value describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = self.dimensions();
        for (name, side) in [("width", width), ("height", height)] {
            if side == 0 || side > MAX_BOARD_SIDE {
                return Err(ConfigError::Validation(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_BOARD_SIDE, side
                )));
            }
        }

        let palette_len = Color::ALL.len() as u8;
        if self.colors_on_field == 0 || self.colors_on_field > palette_len {
            return Err(ConfigError::Validation(format!(
                "colors_on_field must be between 1 and {}, got {}",
                palette_len, self.colors_on_field
            )));
        }

        let cells = (width as usize) * (height as usize);
        if self.spawn_per_turn == 0 || self.spawn_per_turn as usize > cells {
            return Err(ConfigError::Validation(format!(
                "spawn_per_turn must be between 1 and {}, got {}",
                cells, self.spawn_per_turn
            )));
        }

        let longest = width.max(height);
        if self.items_in_line < 2 || self.items_in_line > longest {
            return Err(ConfigError::Validation(format!(
                "items_in_line must be between 2 and {}, got {}",
                longest, self.items_in_line
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.dimensions(), (10, 10));
    }

    #[test]
    fn test_overrides_apply_per_axis() {
        let config = GameConfig {
            difficulty: Difficulty::Hard,
            width: Some(9),
            ..GameConfig::default()
        };
        assert_eq!(config.dimensions(), (9, 15));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = GameConfig::from_toml_str("difficulty = \"medium\"\nitems_in_line = 4\n").unwrap();
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.items_in_line, 4);
        assert_eq!(config.spawn_per_turn, DEFAULT_SPAWN_PER_TURN);
        assert!(config.show_next_colors);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = GameConfig::from_toml_str("difficulty = \"impossible\"").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let too_many_colors = GameConfig {
            colors_on_field: 13,
            ..GameConfig::default()
        };
        assert!(matches!(
            too_many_colors.validate(),
            Err(ConfigError::Validation(_))
        ));

        let zero_width = GameConfig {
            width: Some(0),
            ..GameConfig::default()
        };
        assert!(zero_width.validate().is_err());

        let line_too_long = GameConfig {
            items_in_line: 11,
            ..GameConfig::default()
        };
        assert!(line_too_long.validate().is_err());

        let no_spawn = GameConfig {
            spawn_per_turn: 0,
            ..GameConfig::default()
        };
        assert!(no_spawn.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/lines.toml");
        let config = GameConfig::load_or_default(path).unwrap();
        assert_eq!(config, GameConfig::default());
        assert!(matches!(
            GameConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
