use std::path::PathBuf;

/// Errors that can occur when loading configuration.
///
/// Board and match rejections (full column, out-of-range column) are expected
/// outcomes the caller branches on and live in [`crate::game::MoveError`],
/// not here.
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
