use std::path::{Path, PathBuf};
use std::str::FromStr;

use ratatui::style::Color;

use crate::error::ConfigError;
use crate::game::COLS;

/// Log levels accepted in `[logging] level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Board presentation and game-flow settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the cursor starts on
    pub start_column: usize,
    /// Reset the board once the game-over notice is dismissed
    pub auto_reset: bool,
    pub player_a_name: String,
    pub player_b_name: String,
    pub player_a_color: String,
    pub player_b_color: String,
    pub empty_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: 3,
            auto_reset: true,
            player_a_name: "Red".into(),
            player_b_name: "Yellow".into(),
            player_a_color: "red".into(),
            player_b_color: "yellow".into(),
            empty_color: "darkgray".into(),
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: PathBuf::from("connect_four.log"),
            level: "info".into(),
        }
    }
}

/// Parse a terminal color name ("red", "darkgray", "#ff8800", ...).
pub fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::Validation(format!("{field}: unknown color '{value}'")))
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
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be in [0, {}]",
                COLS - 1
            )));
        }
        if self.ui.player_a_name.trim().is_empty() || self.ui.player_b_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ui.player_a_name and ui.player_b_name must not be empty".into(),
            ));
        }

        parse_color("ui.player_a_color", &self.ui.player_a_color)?;
        parse_color("ui.player_b_color", &self.ui.player_b_color)?;
        parse_color("ui.empty_color", &self.ui.empty_color)?;

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
