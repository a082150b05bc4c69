//! Parsing of keymap description files.

pub mod keymap_toml;

// Re-export commonly used functions
pub use keymap_toml::{parse_keymap_file, parse_keymap_str};
