use std::path::Path;

use crate::error::ConfigError;
use crate::game::Player;

/// Which seat moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    Red,
    Yellow,
}

impl FirstPlayer {
    pub fn to_player(self) -> Player {
        match self {
            FirstPlayer::Red => Player::Red,
            FirstPlayer::Yellow => Player::Yellow,
        }
    }
}

/// Display names and turn order.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub red: String,
    pub yellow: String,
    pub first: FirstPlayer,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            red: "Red".to_string(),
            yellow: "Yellow".to_string(),
            first: FirstPlayer::Red,
        }
    }
}

/// Terminal UI timing.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Event poll interval in milliseconds
    pub tick_ms: u64,
    /// Pause before a machine-controlled seat moves, in milliseconds
    pub machine_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            tick_ms: 100,
            machine_delay_ms: 250,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.red.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.red must not be empty".into(),
            ));
        }
        if self.players.yellow.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.yellow must not be empty".into(),
            ));
        }
        if self.players.red == self.players.yellow {
            return Err(ConfigError::Validation(
                "players.red and players.yellow must be distinct".into(),
            ));
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::Validation("ui.tick_ms must be > 0".into()));
        }
        Ok(())
    }

    /// Display name configured for a player.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.players.red,
            Player::Yellow => &self.players.yellow,
        }
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
