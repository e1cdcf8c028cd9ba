//! User configuration stored as TOML.
//!
//! Location, in order of precedence:
//! 1. an explicit path (`--config`)
//! 2. `$TWEETEXT_CONFIG`
//! 3. `<config dir>/tweetext/config.toml` (e.g. `~/.config/tweetext/config.toml`)
//!
//! A missing file at the default location means built-in defaults. A missing
//! file that was asked for explicitly is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::extract::ExtractionConfig;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "TWEETEXT_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Output defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write one `.txt` per export here instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destdir: Option<PathBuf>,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub extract: ExtractionConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Default config file location.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("tweetext").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Resolve which file to load, and whether it must exist.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<(PathBuf, bool), ConfigError> {
        if let Some(path) = explicit {
            return Ok((path.to_path_buf(), true));
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
            return Ok((PathBuf::from(path), true));
        }
        Ok((Self::default_path()?, false))
    }

    /// Load the effective configuration.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = Self::resolve_path(explicit)?;
        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound { path });
            }
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
