//! Keymap file I/O service.
//!
//! This module centralizes reading keymap descriptions and writing generated
//! output, so every command reports file errors the same way.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{models::Keymap, parser};

/// Service for keymap file I/O.
pub struct KeymapService;

impl KeymapService {
    /// Loads a keymap description from a TOML file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use splitmap::services::KeymapService;
    ///
    /// let keymap = KeymapService::load(Path::new("corne.toml"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<Keymap> {
        parser::parse_keymap_file(path)
            .with_context(|| format!("Failed to load keymap from {}", path.display()))
    }

    /// Writes generated output to `path`.
    ///
    /// This performs an atomic write using a temp file + rename pattern so a
    /// failed run never leaves a truncated keymap behind.
    pub fn write_output(content: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

        tracing::info!(path = %path.display(), bytes = content.len(), "wrote output");
        Ok(())
    }
}

/// `corne.keymap` → `corne.keymap.tmp`, next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
