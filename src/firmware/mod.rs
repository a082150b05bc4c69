//! Keymap transformation, validation and generation.
//!
//! This module flattens layout grids into firmware binding order, checks a
//! keymap the way the ZMK configuration loader would, and renders the
//! devicetree text.

pub mod generator;
pub mod mapping;
pub mod validator;

// Re-export firmware types
pub use generator::KeymapGenerator;
pub use mapping::{flatten, flatten_mirrored};
pub use validator::KeymapValidator;
