//! Game configuration: TOML file, then command-line overrides.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::audio::SoundKey;
use crate::cli::Cli;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Sound cue settings.
    sounds: SoundConfig,
    /// Logging settings.
    log: LogConfig,
}

/// Where the sound cues come from.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Play sounds at all.
    enabled: bool,
    /// Asset for a placed mark.
    place: PathBuf,
    /// Asset for a win.
    win: PathBuf,
}

impl SoundConfig {
    /// Asset path for a cue.
    pub fn path(&self, key: SoundKey) -> &Path {
        match key {
            SoundKey::Place => &self.place,
            SoundKey::Win => &self.win,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            place: PathBuf::from("assets/place.mp3"),
            win: PathBuf::from("assets/win.mp3"),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File receiving log lines.
    file: PathBuf,
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictactoe.log"),
            filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Builds the effective configuration for a command line.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.apply_overrides(cli);
        Ok(config)
    }

    /// Applies command-line flags on top of file values.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.place_sound {
            self.sounds.place = path.clone();
        }
        if let Some(path) = &cli.win_sound {
            self.sounds.win = path.clone();
        }
        if cli.mute {
            self.sounds.enabled = false;
        }
        if let Some(path) = &cli.log_file {
            self.log.file = path.clone();
        }
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
