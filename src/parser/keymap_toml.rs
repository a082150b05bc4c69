//! TOML keymap description parser.
//!
//! A keymap file lists layers and swap behaviors:
//!
//! ```toml
//! [[layer]]
//! name = "base"
//! [layer.left]
//! rows = [["&kp TAB", "&kp Q", "&kp W", "&kp E", "&kp R", "&kp T"], ...]
//! thumbs = ["XXX", "&kp LGUI", "&mo NAV", "&kp SPACE"]
//! rotation = "&inc_dec_kp C_VOL_UP C_VOL_DN"
//! [layer.right]
//! # same shape
//!
//! [[layer]]
//! name = "swp"
//! mirror_of = "base"
//!
//! [[swap_behavior]]
//! name = "swp_a"
//! tap = "&kp A"
//! ```
//!
//! A layer may instead give `bindings`, all 46 tokens in the documented grid
//! order. `XXX` and `___` are accepted as aliases for `&none` and `&trans`.

use crate::models::{Binding, HalfGrid, Keymap, Layer, LayoutGrid, SwapTapDance};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Root of a keymap file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct KeymapFile {
    #[serde(default, rename = "layer")]
    layers: Vec<LayerEntry>,
    #[serde(default, rename = "swap_behavior")]
    swap_behaviors: Vec<SwapBehaviorEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayerEntry {
    name: String,
    left: Option<HalfEntry>,
    right: Option<HalfEntry>,
    bindings: Option<Vec<String>>,
    mirror_of: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HalfEntry {
    rows: Vec<Vec<String>>,
    thumbs: Vec<String>,
    rotation: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SwapBehaviorEntry {
    name: String,
    tap: String,
}

/// Parses a keymap description file.
pub fn parse_keymap_file(path: &Path) -> Result<Keymap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;
    parse_keymap_str(&content)
        .with_context(|| format!("Failed to parse keymap file: {}", path.display()))
}

/// Parses a keymap description from TOML text.
pub fn parse_keymap_str(content: &str) -> Result<Keymap> {
    let file: KeymapFile = toml::from_str(content).context("Invalid keymap TOML")?;

    let mut keymap = Keymap::new();
    for entry in file.layers {
        let name = entry.name.clone();
        let layer = build_layer(entry).with_context(|| format!("Invalid layer '{name}'"))?;
        debug!(layer = %layer.name, mirror = layer.is_mirror(), "parsed layer");
        keymap.add_layer(layer)?;
    }

    for entry in file.swap_behaviors {
        let behavior = SwapTapDance::new(entry.name, Binding::parse(&entry.tap));
        debug!(behavior = %behavior.name, tap = %behavior.tap, "parsed swap behavior");
        keymap.add_behavior(behavior)?;
    }

    Ok(keymap)
}

fn build_layer(entry: LayerEntry) -> Result<Layer> {
    let label = format!("layer '{}'", entry.name);

    match (entry.left, entry.right, entry.bindings, entry.mirror_of) {
        (Some(left), Some(right), None, None) => {
            let left = build_half(&format!("{label} left"), left)?;
            let right = build_half(&format!("{label} right"), right)?;
            Ok(Layer::from_grid(entry.name, LayoutGrid::new(left, right)))
        }
        (None, None, Some(bindings), None) => {
            let tokens = bindings.iter().map(|t| Binding::parse(t)).collect();
            let grid = LayoutGrid::from_positional(tokens)?;
            Ok(Layer::from_grid(entry.name, grid))
        }
        (None, None, None, Some(source)) => Ok(Layer::mirror_of(entry.name, source)),
        (Some(_), None, None, None) | (None, Some(_), None, None) => {
            anyhow::bail!("{label} must define both 'left' and 'right' halves")
        }
        _ => anyhow::bail!(
            "{label} must use exactly one of 'left'/'right', 'bindings' or 'mirror_of'"
        ),
    }
}

fn build_half(label: &str, half: HalfEntry) -> Result<HalfGrid<Binding>> {
    let rows = half
        .rows
        .iter()
        .map(|row| row.iter().map(|t| Binding::parse(t)).collect())
        .collect();
    let thumbs = half.thumbs.iter().map(|t| Binding::parse(t)).collect();

    Ok(HalfGrid::from_parts(
        label,
        rows,
        thumbs,
        Binding::parse(&half.rotation),
    )?)
}
