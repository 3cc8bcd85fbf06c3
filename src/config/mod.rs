//! # Configuration
//!
//! `grue` reads a small TOML file that says which world to load and where
//! logs go. Every field has a default, so a missing section is fine.
//!
//! ```toml
//! [game]
//! world_file = "data/world.json"
//! show_location_each_turn = true
//! prompt = "> "
//!
//! [logging]
//! level = "info"
//! file = "grue.log"
//! ```
//!
//! Precedence: CLI args > config file > defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_world_file")]
    pub world_file: String,
    /// Overrides the world document's welcome banner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome_message: Option<String>,
    /// Overrides the world document's farewell.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_message: Option<String>,
    /// Print the current room name before every prompt.
    #[serde(default = "default_show_location")]
    pub show_location_each_turn: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_world_file() -> String {
    "data/world.json".to_string()
}

fn default_show_location() -> bool {
    true
}

fn default_prompt() -> String {
    "> ".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_file: default_world_file(),
            welcome_message: None,
            exit_message: None,
            show_location_each_turn: default_show_location(),
            prompt: default_prompt(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; narration owns the terminal, so logs go here by default.
    /// An empty string sends logs to stderr instead.
    #[serde(default = "default_log_file", skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> Option<String> {
    Some("grue.log".to_string())
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl LoggingConfig {
    /// Parse `level`, falling back to Info for unknown names.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        Self::from_toml_str(&content).map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
