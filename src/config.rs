//! Configuration file handling.
//!
//! The config lives at `$TFRAG_CONFIG` when set, otherwise at
//! `<config dir>/tfrag/config.toml`. A missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "TFRAG_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub log: LogConfig,
}

/// Defaults for simulated playback (`tfrag play`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Length of the simulated resource in seconds
    pub duration: f64,
    /// Seconds advanced per tick
    pub tick: f64,
    /// Upper bound on ticks per run
    pub max_ticks: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            duration: 120.0,
            tick: 0.5,
            max_ticks: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("tfrag").join("config.toml"))
    }

    /// Load the config, falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to its resolved path, creating parent directories.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let playback = &self.playback;
        if !(playback.duration.is_finite() && playback.duration > 0.0) {
            bail!("playback.duration must be a positive number of seconds");
        }
        if !(playback.tick.is_finite() && playback.tick > 0.0) {
            bail!("playback.tick must be a positive number of seconds");
        }
        Ok(())
    }
}
