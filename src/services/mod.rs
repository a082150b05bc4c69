//! Service layer for file I/O.
//!
//! This module contains services that coordinate between the parser, the
//! models and the file system.

pub mod keymaps;

// Re-export commonly used types
pub use keymaps::KeymapService;
