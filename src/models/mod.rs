//! Data models for split layouts, layers and swap behaviors.
//!
//! This module contains the core data structures used throughout the crate.
//! Models are independent of file formats and rendering.

pub mod behavior;
pub mod binding;
pub mod grid;
pub mod keymap;
pub mod position;

// Re-export all model types
pub use behavior::SwapTapDance;
pub use binding::Binding;
pub use grid::{HalfGrid, LayoutGrid};
pub use keymap::{Keymap, Layer, LayerSource, ResolvedLayer};
pub use position::{Half, Slot, SlotKind, SLOT_COUNT};
