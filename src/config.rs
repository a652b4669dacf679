//! Configuration management for the Invidious list client.
//!
//! Handles loading and saving configuration from JSONC files.
//! Holds the instance URL and the host strings used as default texts.

use crate::invidious::StringTable;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Invidious instance root, e.g. `https://yewtu.be`
    pub instance_url: String,
    /// Localized host strings by numeric id
    pub strings: HashMap<u32, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            instance_url: "https://invidious.nerdvpn.de".to_string(),
            strings: HashMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/invidious-list/config.jsonc`
    /// 3. `~/.config/invidious-list/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `<config_dir>/invidious-list/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join("invidious-list").join("config.jsonc"))
    }

    /// String table built from the configured host strings.
    pub fn string_table(&self) -> StringTable {
        StringTable::new(self.strings.clone())
    }
}

/// Remove `//` line comments that are not inside a string.
///
/// Quotes are counted naively; escaped quotes are not handled.
fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut from = 0;
            while let Some(offset) = line[from..].find("//") {
                let pos = from + offset;
                // An odd quote count before `//` means it sits inside a string.
                if line[..pos].matches('"').count() % 2 == 0 {
                    return line[..pos].trim_end();
                }
                from = pos + 2;
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
