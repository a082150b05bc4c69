//! Behavior command: print a single swap tap-dance node.

use crate::cli::common::{CliError, CliResult};
use crate::config::RenderConfig;
use crate::firmware::KeymapGenerator;
use crate::models::{Binding, Keymap, SwapTapDance};
use clap::Args;

/// Print a swap tap-dance behavior node
#[derive(Debug, Clone, Args)]
pub struct BehaviorArgs {
    /// Behavior name (must be a devicetree identifier)
    #[arg(short, long)]
    pub name: String,

    /// Binding invoked on tap, e.g. "&kp A"
    #[arg(short, long, allow_hyphen_values = true)]
    pub tap: String,
}

impl BehaviorArgs {
    /// Execute the behavior command
    pub fn execute(&self) -> CliResult<()> {
        let behavior = SwapTapDance::new(&self.name, Binding::parse(&self.tap));
        behavior
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid behavior: {e}")))?;

        let keymap = Keymap::new();
        let render = RenderConfig::default();
        print!(
            "{}",
            KeymapGenerator::new(&keymap, &render).standalone_behavior(&behavior)
        );

        Ok(())
    }
}
