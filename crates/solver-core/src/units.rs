//! Row, column, and box membership for a linear cell index.
//!
//! A *unit* is one of the 27 groups of 9 cells subject to the uniqueness
//! invariant: 9 rows, 9 columns, 9 boxes. These accessors are pure index
//! arithmetic; indices are in `[0, 80]` by construction and there are no
//! failure modes.

use crate::digit_set::DigitSet;
use crate::grid::{Cell, Grid};

/// Cell offsets of a 3x3 box relative to its top-left cell.
const BOX_OFFSETS: [usize; 9] = [0, 1, 2, 9, 10, 11, 18, 19, 20];

/// The 9 cell indices of the row containing cell `i`.
pub fn row_of(i: usize) -> [usize; 9] {
    let start = i / 9 * 9;
    std::array::from_fn(|k| start + k)
}

/// The 9 cell indices of the column containing cell `i`.
pub fn column_of(i: usize) -> [usize; 9] {
    let offset = i % 9;
    std::array::from_fn(|k| offset + k * 9)
}

/// The 9 cell indices of the 3x3 box containing cell `i`.
pub fn box_of(i: usize) -> [usize; 9] {
    let base = (i % 9 / 3) * 3 + (i / 27) * 27;
    std::array::from_fn(|k| base + BOX_OFFSETS[k])
}

impl Grid {
    /// Materialize the 9 cells at the given unit indices.
    pub fn unit(&self, indices: [usize; 9]) -> [Cell; 9] {
        indices.map(|i| self.at(i))
    }
}

/// Union of the digits already placed in cell `i`'s row, column, and box
/// (its peer set). Overlaps at the intersections collapse in the set.
pub fn peer_digits(grid: &Grid, i: usize) -> DigitSet {
    let mut seen = DigitSet::empty();
    for indices in [row_of(i), column_of(i), box_of(i)] {
        for idx in indices {
            if let Some(d) = grid.at(idx) {
                seen.insert(d);
            }
        }
    }
    seen
}
