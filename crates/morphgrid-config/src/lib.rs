//! Configuration file handling for morphgrid.
//!
//! The configuration lives at `<config dir>/morphgrid/config.toml`. Every field
//! is optional; a missing file yields [`Config::default`]. The file is only ever
//! read, never written.

mod error;
mod keys;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;
pub use keys::KeyBindings;

/// Name of the configuration file inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Bounds for the frame interval, in milliseconds.
const MIN_FRAME_INTERVAL_MS: u64 = 1;
const MAX_FRAME_INTERVAL_MS: u64 = 1000;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target time between animation frames.
    pub frame_interval_ms: u64,
    /// Show the key binding bar at the bottom of the screen.
    pub show_help: bool,
    /// Keys that toggle each formation.
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval_ms: 16,
            show_help: true,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load the configuration from the platform config directory.
    ///
    /// Falls back to defaults when no config directory can be resolved or the
    /// file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source: Box::new(source),
        })?;
        config.keys.validate()?;

        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source: Box::new(source),
        })?;
        config.keys.validate()?;
        Ok(config)
    }

    /// Frame interval clamped to a sane range.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(
            self.frame_interval_ms
                .clamp(MIN_FRAME_INTERVAL_MS, MAX_FRAME_INTERVAL_MS),
        )
    }
}

/// Path of the configuration file, if a config directory can be resolved.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "morphgrid").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
