//! Configuration file loading for the arena.
//!
//! Settings live in `chaos.toml` in the working directory. Every field is
//! optional; a missing file yields the defaults.

use std::path::{Path, PathBuf};

use chaos_engine::{MatchSettings, Pacing, PlayerSettings};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Arena configuration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArenaConfig {
    /// Number of games per `match` run. Defaults to 10.
    #[serde(default = "default_games")]
    pub games: u32,
    /// Base seed; game `i` uses `seed + i`. Random when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Bot-vs-bot games still running after this many moves are recorded as unfinished.
    #[serde(default = "default_max_plies")]
    pub max_plies: u32,
    /// First side's god and bot flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<PlayerSettings>,
    /// Second side's god and bot flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<PlayerSettings>,
    /// Presentation delays used by `play --pace`.
    #[serde(default)]
    pub pacing: Pacing,
}

fn default_games() -> u32 {
    10
}

fn default_max_plies() -> u32 {
    500
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: default_games(),
            seed: None,
            max_plies: default_max_plies(),
            first: None,
            second: None,
            pacing: Pacing::default(),
        }
    }
}

impl ArenaConfig {
    /// Loads `chaos.toml` from the working directory, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if it contains invalid TOML.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads a configuration file that must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Returns the default configuration path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chaos.toml")
    }

    /// Match settings, with unset sides taken from [`MatchSettings::default`].
    pub fn match_settings(&self) -> MatchSettings {
        let defaults = MatchSettings::default();
        MatchSettings {
            first: self.first.unwrap_or(defaults.first),
            second: self.second.unwrap_or(defaults.second),
        }
    }
}
