//! splitmap - split keyboard layout helpers for ZMK keymaps
//!
//! Flattens split layouts into firmware binding order, derives mirrored
//! ("swapped-hands") layers and generates swap tap-dance behaviors.

use clap::{Parser, Subcommand};
use splitmap::cli::{
    BehaviorArgs, CliResult, ConfigArgs, FlattenArgs, GenerateArgs, ValidateArgs,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// splitmap - split keyboard layout helpers for ZMK keymaps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a .keymap file
    Generate(GenerateArgs),
    /// Print one layer in firmware binding order
    Flatten(FlattenArgs),
    /// Print a swap tap-dance behavior node
    Behavior(BehaviorArgs),
    /// Validate a keymap description
    Validate(ValidateArgs),
    /// Show or change render configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Generate(args) => args.execute(),
            Self::Flatten(args) => args.execute(),
            Self::Behavior(args) => args.execute(),
            Self::Validate(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for generated output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e}");
        std::process::exit(e.code.code());
    }
}
