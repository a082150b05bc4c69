//! Integration tests for parsing, validating and generating a full keymap.

use splitmap::config::RenderConfig;
use splitmap::firmware::mapping::{flatten, flatten_mirrored};
use splitmap::firmware::validator::ValidationErrorKind;
use splitmap::firmware::{KeymapGenerator, KeymapValidator};
use splitmap::models::{Binding, SwapTapDance};
use splitmap::parser::parse_keymap_str;
use splitmap::services::KeymapService;

mod fixtures;
use fixtures::*;

#[test]
fn test_corne_keymap_parses_and_validates() {
    let keymap = parse_keymap_str(CORNE_KEYMAP).unwrap();
    assert_eq!(keymap.layers.len(), 3);
    assert_eq!(keymap.behaviors.len(), 2);
    assert_eq!(keymap.layer_index("SWP"), Some(2));

    let report = KeymapValidator::new(&keymap).validate().unwrap();
    assert!(report.is_valid(), "{}", report.format_message());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_generated_layers_follow_firmware_order() {
    let keymap = parse_keymap_str(CORNE_KEYMAP).unwrap();
    let render = RenderConfig::default();
    let output = KeymapGenerator::new(&keymap, &render)
        .generate_keymap()
        .unwrap();

    let base = keymap.resolve("base").unwrap();
    assert!(!base.mirrored);

    let straight = binding_tokens(layer_bindings_block(&output, "base_layer"));
    assert_eq!(straight, flatten(base.grid));

    let swapped = binding_tokens(layer_bindings_block(&output, "swp_layer"));
    assert_eq!(swapped, flatten_mirrored(base.grid));
}

#[test]
fn test_generated_mirror_layer_content() {
    let keymap = parse_keymap_str(CORNE_KEYMAP).unwrap();
    let render = RenderConfig::default();
    let output = KeymapGenerator::new(&keymap, &render)
        .generate_keymap()
        .unwrap();

    let swapped = binding_tokens(layer_bindings_block(&output, "swp_layer"));

    // Row 0 starts with the right half reversed
    assert_eq!(swapped[0], Binding::new("&kp BSPC"));
    assert_eq!(swapped[5], Binding::new("&kp Y"));
    assert_eq!(swapped[6], Binding::new("&kp T"));
    assert_eq!(swapped[11], Binding::new("&kp TAB"));

    // Rotation pair trades places
    assert_eq!(swapped[36], Binding::new("&inc_dec_kp PG_UP PG_DN"));
    assert_eq!(swapped[37], Binding::new("&inc_dec_kp C_VOL_UP C_VOL_DN"));

    // Thumb row swaps halves without reversing
    assert_eq!(swapped[38], Binding::new("&swp_enter"));
    assert_eq!(swapped[41], Binding::none());
    assert_eq!(swapped[42], Binding::none());
    assert_eq!(swapped[45], Binding::new("&swp_space"));
}

#[test]
fn test_generated_keymap_structure() {
    let keymap = parse_keymap_str(CORNE_KEYMAP).unwrap();
    let render = RenderConfig::default();
    let output = KeymapGenerator::new(&keymap, &render)
        .generate_keymap()
        .unwrap();

    assert!(output.contains("#include <behaviors.dtsi>"));
    assert!(output.contains("#include <dt-bindings/zmk/keys.h>"));
    assert!(output.contains("#define BASE 0\n"));
    assert!(output.contains("#define NAV 1\n"));
    assert!(output.contains("#define SWP 2\n"));
    assert!(output.contains("compatible = \"zmk,keymap\";"));
    assert!(output.contains("swp_space: swp_space {"));
    assert!(output.contains("label = \"ZB_swp_enter\";"));
    assert!(output.contains("bindings = <&kp SPACE>, <&mo SWP>;"));

    let behaviors_at = output.find("behaviors {").unwrap();
    let keymap_at = output.find("keymap {").unwrap();
    assert!(behaviors_at < keymap_at);
}

#[test]
fn test_behavior_node_exact_text() {
    let keymap = parse_keymap_str(CORNE_KEYMAP).unwrap();
    let render = RenderConfig::default();
    let generator = KeymapGenerator::new(&keymap, &render);

    let node = generator.behavior_node(&SwapTapDance::new("swp_b", "&kp B"), 0);
    let expected = "swp_b: swp_b {\n    \
                    label = \"ZB_swp_b\";\n    \
                    compatible = \"zmk,behavior-tap-dance\";\n    \
                    #binding-cells = <0>;\n    \
                    tapping-term-ms = <200>;\n    \
                    bindings = <&kp B>, <&mo SWP>;\n\
                    };\n";
    assert_eq!(node, expected);
}

#[test]
fn test_missing_swap_layer_is_reported() {
    let content = CORNE_KEYMAP.replace("name = \"swp\"", "name = \"mirror\"");
    let keymap = parse_keymap_str(&content).unwrap();
    let report = KeymapValidator::new(&keymap).validate().unwrap();

    assert!(!report.is_valid());
    assert!(report
        .errors
        .iter()
        .any(|e| e.kind == ValidationErrorKind::UndefinedReference));
}

#[test]
fn test_unaligned_render_still_preserves_tokens() {
    let keymap = parse_keymap_str(CORNE_KEYMAP).unwrap();
    let render = RenderConfig {
        align_columns: false,
        indent: 2,
        ..RenderConfig::default()
    };
    let output = KeymapGenerator::new(&keymap, &render)
        .generate_keymap()
        .unwrap();

    let base = keymap.resolve("base").unwrap();
    let straight = binding_tokens(layer_bindings_block(&output, "base_layer"));
    assert_eq!(straight, flatten(base.grid));
    assert!(output.contains("\n  keymap {\n"));
}

#[test]
fn test_service_round_trip_through_file() {
    let (path, temp_dir) = create_temp_keymap_file(CORNE_KEYMAP);
    let keymap = KeymapService::load(&path).unwrap();

    let render = RenderConfig::default();
    let output = KeymapGenerator::new(&keymap, &render)
        .generate_keymap()
        .unwrap();

    let out_path = temp_dir.path().join("build").join("corne.keymap");
    KeymapService::write_output(&output, &out_path).unwrap();
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), output);
}
