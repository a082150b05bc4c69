//! Render configuration CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spaces per nesting level (1-16)
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Pad binding columns so rows line up
    #[arg(long, value_name = "BOOL")]
    align_columns: Option<bool>,

    /// Header to include; repeat to replace the whole list
    #[arg(long = "include", value_name = "HEADER")]
    includes: Vec<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}"))),
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let path = config_path(self.config.as_deref())?;
        let config = Config::load_from(&path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Configuration file: {}", path.display());
            println!("  indent:        {}", config.render.indent);
            println!("  align_columns: {}", config.render.align_columns);
            println!("  includes:      {}", config.render.includes.join(", "));
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.indent.is_none() && self.align_columns.is_none() && self.includes.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --indent, --align-columns, or --include",
            ));
        }

        let path = config_path(self.config.as_deref())?;
        let mut config = Config::load_from(&path)
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?;

        if let Some(indent) = self.indent {
            config.render.indent = indent;
        }
        if let Some(align) = self.align_columns {
            config.render.align_columns = align;
        }
        if !self.includes.is_empty() {
            config.render.includes.clone_from(&self.includes);
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {e}")))?;
        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        eprintln!("✓ Saved {}", path.display());
        Ok(())
    }
}
