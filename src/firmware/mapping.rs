//! Grid to firmware-order transforms.
//!
//! The keymap `bindings` list is consumed row by row: row 0 (left 6, right 6),
//! row 1, row 2, then the rotation pair (left, right), then the thumb row
//! (left 4, right 4). Both transforms here are pure permutations; they move
//! entries between slots and never look inside them.

use crate::error::KeymapResult;
use crate::models::{LayoutGrid, Slot};

/// Flattens `grid` into firmware order.
///
/// The result always holds exactly one entry per slot.
///
/// # Examples
///
/// ```
/// use splitmap::firmware::mapping::flatten;
/// use splitmap::models::LayoutGrid;
///
/// let grid = LayoutGrid::from_positional((0..46).collect::<Vec<u32>>()).unwrap();
/// let flat = flatten(&grid);
/// assert_eq!(&flat[..8], &[0, 1, 2, 3, 4, 5, 18, 19]);
/// ```
pub fn flatten<T: Clone>(grid: &LayoutGrid<T>) -> Vec<T> {
    Slot::firmware_order().map(|slot| grid[slot].clone()).collect()
}

/// Flattens the opposite-hand assignment of `grid` into firmware order.
///
/// Entry `i` is taken from the mirror image of the slot the firmware reads
/// at `i`: rows 0-2 swap halves and reverse columns, the thumb row swaps
/// halves but keeps column order, and the two rotation slots trade places.
pub fn flatten_mirrored<T: Clone>(grid: &LayoutGrid<T>) -> Vec<T> {
    Slot::firmware_order()
        .map(|slot| grid[slot.mirrored()].clone())
        .collect()
}

/// [`flatten`] over tokens given in the documented grid order.
pub fn flatten_positional<T: Clone>(tokens: Vec<T>) -> KeymapResult<Vec<T>> {
    LayoutGrid::from_positional(tokens).map(|grid| flatten(&grid))
}

/// [`flatten_mirrored`] over tokens given in the documented grid order.
pub fn flatten_mirrored_positional<T: Clone>(tokens: Vec<T>) -> KeymapResult<Vec<T>> {
    LayoutGrid::from_positional(tokens).map(|grid| flatten_mirrored(&grid))
}
