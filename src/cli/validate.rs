//! Validate command for keymap descriptions.

use crate::cli::common::{CliError, CliResult};
use crate::firmware::KeymapValidator;
use crate::services::KeymapService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a keymap description without generating output
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to keymap description (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidateResponse {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let keymap = KeymapService::load(&self.keymap).map_err(|e| CliError::io(format!("{e:#}")))?;

        let report = KeymapValidator::new(&keymap)
            .validate()
            .map_err(|e| CliError::io(format!("Validation failed: {e:#}")))?;

        if self.json {
            let response = ValidateResponse {
                valid: report.is_valid(),
                errors: report.errors.iter().map(ToString::to_string).collect(),
                warnings: report.warnings.iter().map(ToString::to_string).collect(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if report.is_valid() && report.warnings.is_empty() {
            println!("✓ Keymap is valid");
        } else {
            print!("{}", report.format_message());
        }

        if report.is_valid() {
            Ok(())
        } else {
            Err(CliError::validation("Keymap validation failed"))
        }
    }
}
