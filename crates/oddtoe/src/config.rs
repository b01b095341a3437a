//! Game configuration loaded from TOML, with command-line overrides.

use derive_getters::Getters;
use derive_more::{Display, Error};
use oddtoe_rules::BoardSize;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a local session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Board size for the first round.
    #[serde(default)]
    size: BoardSize,

    /// Largest size the size selector goes up to.
    #[serde(default = "default_max_size")]
    max_size: BoardSize,

    /// Name shown for the X player.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Name shown for the O player.
    #[serde(default = "default_player_o")]
    player_o: String,
}

fn default_max_size() -> BoardSize {
    BoardSize::CLASSIC.grow().grow().grow()
}

fn default_player_x() -> String {
    "Player X".to_string()
}

fn default_player_o() -> String {
    "Player O".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            max_size: default_max_size(),
            player_x: default_player_x(),
            player_o: default_player_o(),
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
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(size = config.size.get(), max_size = config.max_size.get(), "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    ///
    /// A requested size beyond `max_size` raises the cap to match.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<BoardSize>,
        player_x: Option<String>,
        player_o: Option<String>,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
            self.max_size = self.max_size.max(size);
        }
        if let Some(name) = player_x {
            self.player_x = name;
        }
        if let Some(name) = player_o {
            self.player_o = name;
        }
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.size > self.max_size {
            return Err(ConfigError::new(format!(
                "size {} exceeds max_size {}",
                self.size.get(),
                self.max_size.get()
            )));
        }
        if self.player_x.trim().is_empty() || self.player_o.trim().is_empty() {
            return Err(ConfigError::new("player names must not be empty".to_string()));
        }
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.size().get(), 3);
        assert_eq!(config.max_size().get(), 9);
        assert_eq!(config.player_x(), "Player X");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml("size = 5\nplayer_o = \"Bo\"").unwrap();
        assert_eq!(config.size().get(), 5);
        assert_eq!(config.player_o(), "Bo");
        assert_eq!(config.player_x(), "Player X");
    }

    #[test]
    fn test_even_size_rejected() {
        let err = AppConfig::from_toml("size = 4").unwrap_err();
        assert!(err.message.contains("parse"));
    }

    #[test]
    fn test_size_above_cap_rejected() {
        let err = AppConfig::from_toml("size = 11\nmax_size = 7").unwrap_err();
        assert!(err.message.contains("exceeds"));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(AppConfig::from_toml("player_x = \"  \"").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default().with_overrides(
            Some(BoardSize::new(11).unwrap()),
            Some("Ada".to_string()),
            None,
        );
        assert_eq!(config.size().get(), 11);
        assert_eq!(config.max_size().get(), 11);
        assert_eq!(config.player_x(), "Ada");
        assert_eq!(config.player_o(), "Player O");
    }
}
