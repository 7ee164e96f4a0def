//! Configuration management for Calccast
//!
//! Every field has a default, so a missing file or a partial file is
//! fine:
//!
//! ```toml
//! [engine]
//! max_input_len = 15
//! history_sentinel = "no records"
//!
//! [tui]
//! tick_rate_ms = 100
//! show_history = false
//! colors = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::buffer::DEFAULT_MAX_LEN;
use crate::error::{ConfigError, Result};
use crate::history::NO_RECORDS;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CALC_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest number the keypad can build
    pub max_input_len: usize,
    /// Line shown when the history is empty
    pub history_sentinel: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_LEN,
            history_sentinel: NO_RECORDS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
    /// Open the history panel at startup
    pub show_history: bool,
    pub colors: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            show_history: false,
            colors: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults when no
    /// file exists there.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(
                path = %config_path.display(),
                "No configuration file, using defaults"
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }
}

/// Resolve the configuration file path.
///
/// `CALC_CONFIG` wins (with `~` expanded); otherwise
/// `<config dir>/calccast/config.toml`.
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("calccast").join("config.toml"))
}
