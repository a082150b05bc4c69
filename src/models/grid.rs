//! Fixed-shape layout grid.

use crate::error::{KeymapError, KeymapResult};
use crate::models::position::{
    main_key, thumb_key, Half, Slot, SlotKind, MAIN_COLS, MAIN_ROWS, SLOT_COUNT, THUMB_COLS,
};
use std::ops::Index;

/// The slots of one half of the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfGrid<T> {
    /// Full rows 0-2, columns 0-5
    pub rows: [[T; MAIN_COLS]; MAIN_ROWS],
    /// Thumb row, columns 0-3
    pub thumbs: [T; THUMB_COLS],
    /// Rotary encoder binding
    pub rotation: T,
}

impl<T> HalfGrid<T> {
    /// Builds a half from row vectors, checking every row's length.
    ///
    /// `label` names the half in error messages (e.g. "layer 'base' left").
    pub fn from_parts(
        label: &str,
        rows: Vec<Vec<T>>,
        thumbs: Vec<T>,
        rotation: T,
    ) -> KeymapResult<Self> {
        let found_rows = rows.len();
        let mut fixed = Vec::with_capacity(MAIN_ROWS);
        for (idx, row) in rows.into_iter().enumerate() {
            fixed.push(fixed_array(row, || format!("{label} row {idx}"))?);
        }

        let rows: [[T; MAIN_COLS]; MAIN_ROWS] =
            fixed.try_into().map_err(|_| KeymapError::ArityMismatch {
                context: format!("{label} rows"),
                expected: MAIN_ROWS,
                found: found_rows,
            })?;
        let thumbs = fixed_array(thumbs, || format!("{label} thumb row"))?;

        Ok(Self {
            rows,
            thumbs,
            rotation,
        })
    }
}

/// A complete layout: every slot of both halves, each holding one `T`.
///
/// The shape is fixed by the types, so a `LayoutGrid` always has exactly
/// [`SLOT_COUNT`] entries. Slots are read with `grid[slot]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutGrid<T> {
    /// Left half
    pub left: HalfGrid<T>,
    /// Right half
    pub right: HalfGrid<T>,
}

impl<T> LayoutGrid<T> {
    /// Builds a grid from both halves.
    pub const fn new(left: HalfGrid<T>, right: HalfGrid<T>) -> Self {
        Self { left, right }
    }

    /// Builds a grid from tokens in the documented grid order.
    ///
    /// Fails with [`KeymapError::ArityMismatch`] unless exactly
    /// [`SLOT_COUNT`] tokens are supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use splitmap::models::{Half, LayoutGrid, Slot};
    ///
    /// let grid = LayoutGrid::from_positional((0..46).collect()).unwrap();
    /// assert_eq!(grid[Slot::key(Half::Right, 0, 0).unwrap()], 18);
    /// assert!(LayoutGrid::from_positional((0..45).collect::<Vec<u32>>()).is_err());
    /// ```
    pub fn from_positional(tokens: Vec<T>) -> KeymapResult<Self> {
        if tokens.len() != SLOT_COUNT {
            return Err(KeymapError::ArityMismatch {
                context: "layout".to_string(),
                expected: SLOT_COUNT,
                found: tokens.len(),
            });
        }

        let mut tokens = tokens.into_iter();
        let left_rows = take_rows(&mut tokens);
        let right_rows = take_rows(&mut tokens);
        let left_thumbs: Vec<T> = tokens.by_ref().take(THUMB_COLS).collect();
        let right_thumbs: Vec<T> = tokens.by_ref().take(THUMB_COLS).collect();
        let (Some(left_rotation), Some(right_rotation)) = (tokens.next(), tokens.next()) else {
            return Err(KeymapError::ArityMismatch {
                context: "layout rotation slots".to_string(),
                expected: 2,
                found: 0,
            });
        };

        Ok(Self {
            left: HalfGrid::from_parts("left", left_rows, left_thumbs, left_rotation)?,
            right: HalfGrid::from_parts("right", right_rows, right_thumbs, right_rotation)?,
        })
    }

    /// Returns the half on `side`.
    pub const fn half(&self, side: Half) -> &HalfGrid<T> {
        match side {
            Half::Left => &self.left,
            Half::Right => &self.right,
        }
    }

    /// Iterates entries in the documented grid order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Slot::grid_order().map(move |slot| &self[slot])
    }

    /// Applies `f` to every entry, keeping positions.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> LayoutGrid<U> {
        let mut half = |h: &HalfGrid<T>| HalfGrid {
            rows: std::array::from_fn(|r| std::array::from_fn(|c| f(&h.rows[r][c]))),
            thumbs: std::array::from_fn(|c| f(&h.thumbs[c])),
            rotation: f(&h.rotation),
        };
        let left = half(&self.left);
        let right = half(&self.right);
        LayoutGrid { left, right }
    }
}

impl<T: Clone> LayoutGrid<T> {
    /// Entries in the documented grid order; the inverse of [`Self::from_positional`].
    pub fn to_positional(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// The opposite-hand layout: each slot takes the entry of its mirrored slot.
    #[must_use]
    pub fn mirrored(&self) -> Self {
        let pick = |side: Half| {
            let mirror = |slot: Slot| self[slot.mirrored()].clone();
            HalfGrid {
                rows: std::array::from_fn(|r| {
                    std::array::from_fn(|c| mirror(main_key(side, r, c)))
                }),
                thumbs: std::array::from_fn(|c| mirror(thumb_key(side, c))),
                rotation: mirror(Slot::rotation(side)),
            }
        };
        Self {
            left: pick(Half::Left),
            right: pick(Half::Right),
        }
    }
}

impl<T> Index<Slot> for LayoutGrid<T> {
    type Output = T;

    fn index(&self, slot: Slot) -> &T {
        match slot.kind() {
            SlotKind::Key { half, row, col } => {
                let grid = self.half(half);
                let (row, col) = (usize::from(row), usize::from(col));
                if row < MAIN_ROWS {
                    &grid.rows[row][col]
                } else {
                    &grid.thumbs[col]
                }
            }
            SlotKind::Rotation(half) => &self.half(half).rotation,
        }
    }
}

fn take_rows<T>(tokens: &mut impl Iterator<Item = T>) -> Vec<Vec<T>> {
    (0..MAIN_ROWS)
        .map(|_| tokens.by_ref().take(MAIN_COLS).collect())
        .collect()
}

fn fixed_array<T, const N: usize>(
    items: Vec<T>,
    context: impl FnOnce() -> String,
) -> KeymapResult<[T; N]> {
    let found = items.len();
    items.try_into().map_err(|_| KeymapError::ArityMismatch {
        context: context(),
        expected: N,
        found,
    })
}
