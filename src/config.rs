//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving rendering preferences
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum indentation width accepted in `render.indent`.
const MAX_INDENT: usize = 16;

/// Output formatting preferences for generated keymaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Spaces per nesting level
    pub indent: usize,
    /// Pad binding columns so rows line up
    pub align_columns: bool,
    /// Headers emitted as `#include <...>` lines
    pub includes: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: 4,
            align_columns: true,
            includes: vec![
                "behaviors.dtsi".to_string(),
                "dt-bindings/zmk/keys.h".to_string(),
            ],
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/splitmap/config.toml`
/// - macOS: `~/Library/Application Support/splitmap/config.toml`
/// - Windows: `%APPDATA%\splitmap\config.toml`
///
/// # Validation
///
/// - `render.indent` must be between 1 and 16
/// - include headers must not be blank
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Rendering preferences
    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("splitmap");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, falling back to defaults if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.render.indent == 0 || self.render.indent > MAX_INDENT {
            anyhow::bail!(
                "render.indent must be between 1 and {}, got {}",
                MAX_INDENT,
                self.render.indent
            );
        }

        if self.render.includes.iter().any(|h| h.trim().is_empty()) {
            anyhow::bail!("render.includes must not contain empty entries");
        }

        Ok(())
    }
}
