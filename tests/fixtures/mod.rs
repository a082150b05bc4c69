//! Shared test fixtures for integration and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use splitmap::models::{Binding, LayoutGrid, SLOT_COUNT};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Tokens `pos_0 .. pos_45` in documented grid order.
pub fn pos_tokens() -> Vec<String> {
    (0..SLOT_COUNT).map(|i| format!("pos_{i}")).collect()
}

/// Grid holding `pos_<i>` at documented index `i`.
pub fn pos_grid() -> LayoutGrid<String> {
    LayoutGrid::from_positional(pos_tokens()).unwrap()
}

/// Converts a list of grid indices to `pos_<i>` tokens.
pub fn pos(indices: impl IntoIterator<Item = usize>) -> Vec<String> {
    indices.into_iter().map(|i| format!("pos_{i}")).collect()
}

/// Splits a devicetree bindings block into binding tokens.
///
/// Every token starts with `&`, so each `&` opens a new token.
pub fn binding_tokens(block: &str) -> Vec<Binding> {
    block
        .split('&')
        .map(|part| part.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|part| !part.is_empty())
        .map(|part| Binding::new(format!("&{part}")))
        .collect()
}

/// Extracts the `bindings = < ... >;` block of a layer node.
pub fn layer_bindings_block<'a>(keymap: &'a str, node: &str) -> &'a str {
    let start = keymap
        .find(&format!("{node} {{"))
        .unwrap_or_else(|| panic!("layer node {node} not found"));
    let rest = &keymap[start..];
    let open = rest.find("bindings = <").unwrap() + "bindings = <".len();
    let close = rest[open..].find(">;").unwrap();
    &rest[open..open + close]
}

/// A Corne-style base layer plus a mirrored `swp` layer and two swap behaviors.
pub const CORNE_KEYMAP: &str = r#"
[[layer]]
name = "base"
[layer.left]
rows = [
  ["&kp TAB", "&kp Q", "&kp W", "&kp E", "&kp R", "&kp T"],
  ["&kp ESC", "&kp A", "&kp S", "&kp D", "&kp F", "&kp G"],
  ["&kp LSHFT", "&kp Z", "&kp X", "&kp C", "&kp V", "&kp B"],
]
thumbs = ["XXX", "&kp LGUI", "&mo NAV", "&swp_space"]
rotation = "&inc_dec_kp C_VOL_UP C_VOL_DN"
[layer.right]
rows = [
  ["&kp Y", "&kp U", "&kp I", "&kp O", "&kp P", "&kp BSPC"],
  ["&kp H", "&kp J", "&kp K", "&kp L", "&kp SEMI", "&kp SQT"],
  ["&kp N", "&kp M", "&kp COMMA", "&kp DOT", "&kp FSLH", "&kp RSHFT"],
]
thumbs = ["&swp_enter", "&mo NAV", "&kp RALT", "XXX"]
rotation = "&inc_dec_kp PG_UP PG_DN"

[[layer]]
name = "nav"
[layer.left]
rows = [
  ["___", "___", "___", "___", "___", "___"],
  ["___", "___", "___", "___", "___", "___"],
  ["___", "___", "___", "___", "___", "___"],
]
thumbs = ["___", "___", "___", "___"]
rotation = "___"
[layer.right]
rows = [
  ["&kp HOME", "&kp PG_DN", "&kp PG_UP", "&kp END", "___", "&kp DEL"],
  ["&kp LEFT", "&kp DOWN", "&kp UP", "&kp RIGHT", "___", "___"],
  ["___", "___", "___", "___", "___", "___"],
]
thumbs = ["___", "___", "___", "___"]
rotation = "___"

[[layer]]
name = "swp"
mirror_of = "base"

[[swap_behavior]]
name = "swp_space"
tap = "&kp SPACE"

[[swap_behavior]]
name = "swp_enter"
tap = "&kp RET"
"#;

/// Writes `content` to a keymap file in a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn create_temp_keymap_file(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("keymap.toml");
    fs::write(&path, content).expect("Failed to write keymap file");
    (path, temp_dir)
}
