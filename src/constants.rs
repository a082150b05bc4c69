//! Application-wide constants.
//!
//! This module defines the fixed tokens and values the generated devicetree
//! relies on, along with the application name.

/// The display name of the application.
pub const APP_NAME: &str = "splitmap";

/// Binding token for a position that does nothing.
pub const NONE_BINDING: &str = "&none";

/// Binding token that falls through to the next active layer.
pub const TRANS_BINDING: &str = "&trans";

/// Authoring alias for [`NONE_BINDING`].
pub const NONE_ALIAS: &str = "XXX";

/// Authoring alias for [`TRANS_BINDING`].
pub const TRANS_ALIAS: &str = "___";

/// Layer define toggled by every swap behavior.
pub const SWAP_LAYER: &str = "SWP";

/// Behavior used to momentarily activate a layer.
pub const LAYER_TOGGLE_BEHAVIOR: &str = "&mo";

/// Prefix prepended to a swap behavior name to build its label.
pub const LABEL_PREFIX: &str = "ZB_";

/// Devicetree `compatible` string of the tap-dance behavior.
pub const TAP_DANCE_COMPATIBLE: &str = "zmk,behavior-tap-dance";

/// Tapping term shared by every swap behavior, in milliseconds.
pub const TAPPING_TERM_MS: u32 = 200;

/// Number of parameters a swap behavior accepts when bound.
pub const SWAP_BINDING_CELLS: u32 = 0;
