//! Physical slot coordinates of the split layout.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of full rows on each half.
pub const MAIN_ROWS: usize = 3;
/// Number of columns in each full row.
pub const MAIN_COLS: usize = 6;
/// Row index of the thumb cluster.
pub const THUMB_ROW: u8 = 3;
/// Number of thumb keys on each half.
pub const THUMB_COLS: usize = 4;
/// Slots per half: full rows, thumb row and one rotation slot.
pub const HALF_SLOTS: usize = MAIN_ROWS * MAIN_COLS + THUMB_COLS + 1;
/// Total number of slots in a layout.
pub const SLOT_COUNT: usize = 2 * HALF_SLOTS;

/// One physical side of the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// Left half
    Left,
    /// Right half
    Right,
}

impl Half {
    /// The other half.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Short prefix used in slot names (`l` / `r`).
    pub const fn prefix(self) -> char {
        match self {
            Self::Left => 'l',
            Self::Right => 'r',
        }
    }
}

/// What a [`Slot`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// A key at `(half, row, col)`
    Key {
        /// Side of the board
        half: Half,
        /// Row, 0-2 for full rows and 3 for the thumb row
        row: u8,
        /// Column, 0-5 on full rows and 0-3 on the thumb row
        col: u8,
    },
    /// The rotary encoder slot of one half
    Rotation(Half),
}

/// A position in the layout grid.
///
/// Key slots can only be built through [`Slot::key`], which rejects
/// coordinates outside the grid, so every `Slot` indexes a real cell.
///
/// ```compile_fail
/// use splitmap::models::{Half, Slot, SlotKind};
///
/// let off_grid = Slot(SlotKind::Key { half: Half::Left, row: 0, col: 9 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(SlotKind);

impl Slot {
    /// Builds a key slot, returning `None` if the coordinates are off-grid.
    pub fn key(half: Half, row: u8, col: u8) -> Option<Self> {
        let cols = if row == THUMB_ROW {
            THUMB_COLS
        } else if usize::from(row) < MAIN_ROWS {
            MAIN_COLS
        } else {
            return None;
        };

        (usize::from(col) < cols).then_some(Self(SlotKind::Key { half, row, col }))
    }

    /// The rotation slot of `half`.
    pub const fn rotation(half: Half) -> Self {
        Self(SlotKind::Rotation(half))
    }

    /// What this slot refers to.
    pub const fn kind(self) -> SlotKind {
        self.0
    }

    /// Side this slot belongs to.
    pub const fn half(self) -> Half {
        match self.0 {
            SlotKind::Key { half, .. } | SlotKind::Rotation(half) => half,
        }
    }

    /// The geometrically mirrored slot on the other half.
    ///
    /// Full rows reverse their column order, the thumb row keeps it, and the
    /// rotation slots trade places. Mirroring twice yields the original slot.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        let kind = match self.0 {
            SlotKind::Key { half, row, col } if row == THUMB_ROW => SlotKind::Key {
                half: half.opposite(),
                row,
                col,
            },
            SlotKind::Key { half, row, col } => SlotKind::Key {
                half: half.opposite(),
                row,
                col: (MAIN_COLS as u8 - 1) - col,
            },
            SlotKind::Rotation(half) => SlotKind::Rotation(half.opposite()),
        };
        Self(kind)
    }

    /// Slot at `index` of the documented positional grid order.
    ///
    /// | indices | slots                         |
    /// |---------|-------------------------------|
    /// | 0..18   | left rows 0-2, row-major      |
    /// | 18..36  | right rows 0-2, row-major     |
    /// | 36..40  | left thumb row                |
    /// | 40..44  | right thumb row               |
    /// | 44      | left rotation                 |
    /// | 45      | right rotation                |
    pub fn at_grid_index(index: usize) -> Option<Self> {
        const MAIN: usize = MAIN_ROWS * MAIN_COLS;

        let slot = match index {
            i if i < MAIN => main_key(Half::Left, i / MAIN_COLS, i % MAIN_COLS),
            i if i < 2 * MAIN => {
                let offset = i - MAIN;
                main_key(Half::Right, offset / MAIN_COLS, offset % MAIN_COLS)
            }
            i if i < 2 * MAIN + THUMB_COLS => thumb_key(Half::Left, i - 2 * MAIN),
            i if i < 2 * MAIN + 2 * THUMB_COLS => {
                thumb_key(Half::Right, i - 2 * MAIN - THUMB_COLS)
            }
            i if i == SLOT_COUNT - 2 => Self::rotation(Half::Left),
            i if i == SLOT_COUNT - 1 => Self::rotation(Half::Right),
            _ => return None,
        };
        Some(slot)
    }

    /// Slot consumed at `index` of the firmware binding sequence.
    ///
    /// Rows 0-2 interleave halves (left 6, right 6), then the rotation pair,
    /// then the thumb row (left 4, right 4).
    pub fn at_firmware_index(index: usize) -> Option<Self> {
        const MAIN: usize = 2 * MAIN_ROWS * MAIN_COLS;
        const ROTATIONS: usize = MAIN + 2;

        let slot = match index {
            i if i < MAIN => {
                let row = i / (2 * MAIN_COLS);
                let within = i % (2 * MAIN_COLS);
                let half = if within < MAIN_COLS { Half::Left } else { Half::Right };
                main_key(half, row, within % MAIN_COLS)
            }
            i if i == MAIN => Self::rotation(Half::Left),
            i if i == MAIN + 1 => Self::rotation(Half::Right),
            i if i < ROTATIONS + THUMB_COLS => thumb_key(Half::Left, i - ROTATIONS),
            i if i < SLOT_COUNT => thumb_key(Half::Right, i - ROTATIONS - THUMB_COLS),
            _ => return None,
        };
        Some(slot)
    }

    /// All slots in documented grid order.
    pub fn grid_order() -> impl Iterator<Item = Self> {
        (0..SLOT_COUNT).filter_map(Self::at_grid_index)
    }

    /// All slots in firmware order.
    pub fn firmware_order() -> impl Iterator<Item = Self> {
        (0..SLOT_COUNT).filter_map(Self::at_firmware_index)
    }
}

/// Key on a full row. Callers keep `row < MAIN_ROWS` and `col < MAIN_COLS`.
pub(crate) const fn main_key(half: Half, row: usize, col: usize) -> Slot {
    Slot(SlotKind::Key {
        half,
        row: row as u8,
        col: col as u8,
    })
}

/// Key on the thumb row. Callers keep `col < THUMB_COLS`.
pub(crate) const fn thumb_key(half: Half, col: usize) -> Slot {
    Slot(SlotKind::Key {
        half,
        row: THUMB_ROW,
        col: col as u8,
    })
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            SlotKind::Key { half, row, col } => write!(f, "{}{}{}", half.prefix(), row, col),
            SlotKind::Rotation(half) => write!(f, "{}rot", half.prefix()),
        }
    }
}
