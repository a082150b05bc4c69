//! Properties of the straight and mirrored layout transforms.

use splitmap::firmware::mapping::{
    flatten, flatten_mirrored, flatten_mirrored_positional, flatten_positional,
};
use splitmap::models::{Half, LayoutGrid, Slot, SLOT_COUNT};
use splitmap::KeymapError;
use std::collections::HashMap;

mod fixtures;
use fixtures::*;

fn sorted(mut tokens: Vec<String>) -> Vec<String> {
    tokens.sort();
    tokens
}

#[test]
fn test_straight_transform_end_to_end() {
    let flat = flatten_positional(pos_tokens()).unwrap();

    let mut expected = Vec::new();
    expected.extend(pos(0..6));
    expected.extend(pos(18..24));
    expected.extend(pos(6..12));
    expected.extend(pos(24..30));
    expected.extend(pos(12..18));
    expected.extend(pos(30..36));
    expected.extend(pos([44, 45]));
    expected.extend(pos(36..40));
    expected.extend(pos(40..44));

    assert_eq!(flat, expected);
}

#[test]
fn test_mirrored_transform_end_to_end() {
    let flat = flatten_mirrored_positional(pos_tokens()).unwrap();

    // Row 0: right half reversed, then left half reversed
    let mut row0 = pos((18..24).rev());
    row0.extend(pos((0..6).rev()));
    assert_eq!(&flat[..12], row0.as_slice());

    let mut row2 = pos((30..36).rev());
    row2.extend(pos((12..18).rev()));
    assert_eq!(&flat[24..36], row2.as_slice());
}

#[test]
fn test_permutation_invariant() {
    let input = pos_tokens();
    let straight = flatten_positional(input.clone()).unwrap();
    let mirrored = flatten_mirrored_positional(input.clone()).unwrap();

    assert_eq!(straight.len(), SLOT_COUNT);
    assert_eq!(mirrored.len(), SLOT_COUNT);
    assert_eq!(sorted(straight), sorted(input.clone()));
    assert_eq!(sorted(mirrored), sorted(input));
}

#[test]
fn test_permutation_keeps_duplicate_tokens() {
    let mut input = vec!["&trans".to_string(); SLOT_COUNT];
    input[3] = "&kp A".to_string();
    input[40] = "&none".to_string();

    let flat = flatten_mirrored_positional(input.clone()).unwrap();
    assert_eq!(sorted(flat), sorted(input));
}

#[test]
fn test_mirrored_maps_to_geometric_mirror() {
    let grid = pos_grid();
    let mirrored = flatten_mirrored(&grid);

    for (idx, slot) in Slot::firmware_order().enumerate() {
        assert_eq!(mirrored[idx], grid[slot.mirrored()], "firmware index {idx}");
    }

    // Inverting the straight order on the mirrored output gives the mirrored grid
    let placed: HashMap<Slot, &String> = Slot::firmware_order().zip(&mirrored).collect();
    for slot in Slot::grid_order() {
        assert_eq!(placed[&slot], &grid[slot.mirrored()]);
    }
}

#[test]
fn test_mirroring_twice_is_identity() {
    let grid = pos_grid();
    assert_eq!(flatten_mirrored(&grid.mirrored()), flatten(&grid));
}

#[test]
fn test_thumb_row_keeps_order_while_main_rows_reverse() {
    let flat = flatten_mirrored_positional(pos_tokens()).unwrap();

    // Thumb row: right thumbs (40..44) then left thumbs (36..40), not reversed
    let mut thumbs = pos(40..44);
    thumbs.extend(pos(36..40));
    assert_eq!(&flat[38..46], thumbs.as_slice());

    // Row 1 of the same output is reversed within each half
    let mut row1 = pos((24..30).rev());
    row1.extend(pos((6..12).rev()));
    assert_eq!(&flat[12..24], row1.as_slice());
}

#[test]
fn test_rotation_slots() {
    let straight = flatten_positional(pos_tokens()).unwrap();
    let mirrored = flatten_mirrored_positional(pos_tokens()).unwrap();

    assert_eq!(straight[36..38], pos([44, 45]));
    assert_eq!(mirrored[36..38], pos([45, 44]));
}

#[test]
fn test_arity_mismatch() {
    for count in [0, 45, 47, 64] {
        let tokens: Vec<String> = pos(0..count);
        let err = flatten_positional(tokens.clone()).unwrap_err();
        assert_eq!(
            err,
            KeymapError::ArityMismatch {
                context: "layout".to_string(),
                expected: SLOT_COUNT,
                found: count,
            }
        );
        assert!(flatten_mirrored_positional(tokens).is_err());
    }
}

#[test]
fn test_transforms_do_not_touch_token_contents() {
    let mut input = pos_tokens();
    input[0] = "  &kp  A ".to_string();

    let grid = LayoutGrid::from_positional(input).unwrap();
    let flat = flatten(&grid);
    assert_eq!(flat[0], "  &kp  A ");
    assert_eq!(
        grid[Slot::key(Half::Left, 0, 0).unwrap()],
        flatten_mirrored(&grid)[11]
    );
}
