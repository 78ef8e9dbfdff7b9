// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.doq/config.toml` next to the sync database.
//! The `[cloud]` table describes the remote boundary: whether sync is
//! enabled and, for the simulated transport, its latency and failure rate.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DOQ_DIR_NAME: &str = ".doq";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "sync.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.doq/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote sync settings.
    #[serde(default)]
    pub cloud: CloudConfig,
}

/// Settings for the cloud sync boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Master switch. When false every sync attempt reports failure
    /// without network I/O.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Simulated base round-trip latency in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
    /// Injected transient failure probability in [0, 1].
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

fn default_enabled() -> bool {
    true
}

fn default_latency_ms() -> u64 {
    100
}

fn default_failure_rate() -> f64 {
    0.1
}

impl Default for CloudConfig {
    fn default() -> Self {
        CloudConfig {
            enabled: default_enabled(),
            latency_ms: default_latency_ms(),
            failure_rate: default_failure_rate(),
        }
    }
}

impl Config {
    /// Loads configuration from the given `.doq/` directory.
    pub fn load(doq_dir: &Path) -> Result<Self> {
        let config_path = doq_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.doq/` directory.
    pub fn save(&self, doq_dir: &Path) -> Result<()> {
        let config_path = doq_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the `.doq` directory by walking up from the current directory.
pub fn find_doq_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let doq_dir = current.join(DOQ_DIR_NAME);
        if doq_dir.is_dir() {
            return Ok(doq_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the sync database path inside the `.doq` directory.
pub fn get_db_path(doq_dir: &Path) -> PathBuf {
    doq_dir.join(DB_FILE_NAME)
}

/// Initialize a new `.doq` directory at the given path.
pub fn init_doq_dir(path: &Path) -> Result<PathBuf> {
    let doq_dir = path.join(DOQ_DIR_NAME);

    if doq_dir.exists() {
        return Err(Error::AlreadyInitialized(doq_dir.display().to_string()));
    }

    fs::create_dir_all(&doq_dir)?;
    Config::default().save(&doq_dir)?;
    write_gitignore(&doq_dir)?;

    Ok(doq_dir)
}

/// Write the `.doq/.gitignore` so local sync state never ends up in git.
fn write_gitignore(doq_dir: &Path) -> Result<()> {
    let gitignore_path = doq_dir.join(GITIGNORE_FILE_NAME);
    let content = "# Local sync state\nsync.db\n";
    fs::write(&gitignore_path, content)?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
