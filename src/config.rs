//! Application configuration loaded from TOML.

use crate::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Runtime settings for the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before the bot replies, in milliseconds.
    bot_delay_ms: u64,

    /// Where the terminal game writes its logs.
    log_file: PathBuf,

    /// Seed for the bot's random fallback. Entropy when unset.
    seed: Option<u64>,

    /// Mode to start in, skipping the selection screen.
    default_mode: Option<GameMode>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_delay_ms: 1000,
            log_file: PathBuf::from("tictactoe.log"),
            seed: None,
            default_mode: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(bot_delay_ms = config.bot_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    ///
    /// An explicit path that cannot be read is an error; a missing default
    /// file is not.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        seed: Option<u64>,
        bot_delay_ms: Option<u64>,
    ) -> Self {
        if mode.is_some() {
            self.default_mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(ms) = bot_delay_ms {
            self.bot_delay_ms = ms;
        }
        self
    }

    /// Bot delay as a [`Duration`].
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
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
