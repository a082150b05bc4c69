//! Flatten command: print one layer in firmware binding order.

use crate::cli::common::{CliError, CliResult};
use crate::firmware::{flatten, flatten_mirrored};
use crate::services::KeymapService;
use clap::Args;
use std::path::PathBuf;

/// Print a layer's bindings in firmware order
#[derive(Debug, Clone, Args)]
pub struct FlattenArgs {
    /// Path to keymap description (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub keymap: PathBuf,

    /// Layer name
    #[arg(short, long)]
    pub layer: String,

    /// Emit the opposite-hand (mirrored) order
    #[arg(short, long)]
    pub mirrored: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl FlattenArgs {
    /// Execute the flatten command
    pub fn execute(&self) -> CliResult<()> {
        let keymap = KeymapService::load(&self.keymap).map_err(|e| CliError::io(format!("{e:#}")))?;

        let resolved = keymap
            .resolve(&self.layer)
            .map_err(|e| CliError::validation(e.to_string()))?;

        // A mirror layer flipped again reads straight from its source
        let mirrored = resolved.mirrored != self.mirrored;
        let flat = if mirrored {
            flatten_mirrored(resolved.grid)
        } else {
            flatten(resolved.grid)
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&flat)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for binding in &flat {
                println!("{binding}");
            }
        }

        Ok(())
    }
}
