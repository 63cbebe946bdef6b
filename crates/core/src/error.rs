use std::path::PathBuf;

use crate::types::Coord;

/// Errors raised by board and session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinesError {
    #[error("coordinate {at} is outside the {width}x{height} board")]
    OutOfBounds { at: Coord, width: u8, height: u8 },
}

/// Errors that can occur when loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
