//! Swap tap-dance behavior descriptors.

use crate::constants::{
    LABEL_PREFIX, SWAP_BINDING_CELLS, SWAP_LAYER, TAPPING_TERM_MS, TAP_DANCE_COMPATIBLE,
};
use crate::error::{is_identifier, KeymapError, KeymapResult};
use crate::models::Binding;
use serde::{Deserialize, Serialize};

/// A two-action tap dance: the `tap` binding on a single tap, `&mo SWP` on
/// the second action.
///
/// Everything except `name` and `tap` is fixed: the label is derived from
/// the name, the node takes no binding cells and uses a 200 ms tapping term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapTapDance {
    /// Node name and label, referenced as `&name` from keymaps
    pub name: String,
    /// Binding invoked on a single tap
    pub tap: Binding,
}

impl SwapTapDance {
    /// Creates a swap behavior. No uniqueness check happens here; the keymap
    /// namespace rejects duplicate names.
    pub fn new(name: impl Into<String>, tap: impl Into<Binding>) -> Self {
        Self {
            name: name.into(),
            tap: tap.into(),
        }
    }

    /// Node label, `ZB_<name>`.
    pub fn label(&self) -> String {
        format!("{LABEL_PREFIX}{}", self.name)
    }

    /// Devicetree `compatible` string.
    pub const fn compatible(&self) -> &'static str {
        TAP_DANCE_COMPATIBLE
    }

    /// Value of `#binding-cells`.
    pub const fn binding_cells(&self) -> u32 {
        SWAP_BINDING_CELLS
    }

    /// Value of `tapping-term-ms`.
    pub const fn tapping_term_ms(&self) -> u32 {
        TAPPING_TERM_MS
    }

    /// Dispatch actions in order: the tap binding, then the swap-layer toggle.
    pub fn bindings(&self) -> [Binding; 2] {
        [self.tap.clone(), Binding::layer_toggle(SWAP_LAYER)]
    }

    /// Reference used to bind this behavior in a layer (`&name`).
    pub fn reference(&self) -> Binding {
        Binding::new(format!("&{}", self.name))
    }

    /// Validates the name and tap binding.
    pub fn validate(&self) -> KeymapResult<()> {
        if !is_identifier(&self.name) {
            return Err(KeymapError::InvalidName {
                kind: "behavior",
                name: self.name.clone(),
            });
        }

        if self.tap.is_empty() {
            return Err(KeymapError::EmptyBinding {
                context: format!("behavior '{}' tap", self.name),
            });
        }

        Ok(())
    }
}
