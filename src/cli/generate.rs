//! Generate command for `.keymap` files.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::firmware::{KeymapGenerator, KeymapValidator};
use crate::services::KeymapService;
use clap::Args;
use std::path::PathBuf;

/// Generate a ZMK `.keymap` file from a keymap description
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to keymap description (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Output file (prints to stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

        let keymap = KeymapService::load(&self.keymap).map_err(|e| CliError::io(format!("{e:#}")))?;

        // Validate before generating
        let report = KeymapValidator::new(&keymap)
            .validate()
            .map_err(|e| CliError::io(format!("Validation failed: {e:#}")))?;

        if !report.is_valid() {
            return Err(CliError::validation(format!(
                "Keymap validation failed:\n{}",
                report.format_message()
            )));
        }

        for warning in &report.warnings {
            tracing::warn!("{warning}");
        }

        let output = KeymapGenerator::new(&keymap, &config.render)
            .generate_keymap()
            .map_err(|e| CliError::io(format!("Failed to generate keymap: {e:#}")))?;

        match &self.out {
            Some(path) => {
                KeymapService::write_output(&output, path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                eprintln!("✓ Generated {}", path.display());
            }
            None => print!("{output}"),
        }

        Ok(())
    }
}
