//! CLI command handlers for splitmap.
//!
//! This module provides headless, scriptable access to the layout transforms
//! and keymap generation.

pub mod behavior;
pub mod common;
pub mod config;
pub mod flatten;
pub mod generate;
pub mod validate;

// Re-export types used by main.rs and tests
pub use behavior::BehaviorArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use flatten::FlattenArgs;
pub use generate::GenerateArgs;
pub use validate::ValidateArgs;
