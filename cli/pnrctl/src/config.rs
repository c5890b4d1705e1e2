//! Configuration file handling.
//!
//! The config file holds defaults that flags can override:
//! - whether coordination and interim numbers are accepted
//! - the default output format

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("se", "personnummer", "pnr")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Path of the config file.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Accept coordination numbers (day + 60).
    #[serde(default = "default_true")]
    pub allow_coordination_numbers: bool,

    /// Accept interim numbers (letter in the serial).
    #[serde(default)]
    pub allow_interim_numbers: bool,

    /// Default output format (`table` or `json`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_coordination_numbers: true,
            allow_interim_numbers: false,
            format: None,
        }
    }
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load config from `path`, or return default if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<PathBuf> {
        let path = config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }
}
