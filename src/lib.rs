//! Split keyboard layout library
//!
//! This library describes the physical layout of a split keyboard with one
//! rotary encoder per half, transforms it into the binding order a ZMK keymap
//! expects (straight or mirrored), and generates swap tap-dance behaviors and
//! complete `.keymap` files.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod firmware;
pub mod models;
pub mod parser;
pub mod services;

pub use error::{KeymapError, KeymapResult};
