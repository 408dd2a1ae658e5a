//! Uniqueness-invariant checks over rows, columns, and boxes.
//!
//! A grid is valid when no unit contains the same digit twice. Empty cells
//! are ignored, so a blank grid is trivially valid. Validity says nothing
//! about solvability; it only certifies the givens are not contradictory.

use crate::digit_set::DigitSet;
use crate::grid::{Cell, Grid};
use crate::units;

/// Top-left cell of each of the 9 boxes, row-major.
const BOX_ANCHORS: [usize; 9] = [0, 3, 6, 27, 30, 33, 54, 57, 60];

/// True when no digit occurs twice among the 9 cells.
pub fn unit_is_valid(unit: &[Cell; 9]) -> bool {
    let mut seen = DigitSet::empty();
    for cell in unit {
        if let Some(d) = cell {
            if seen.contains(*d) {
                return false;
            }
            seen.insert(*d);
        }
    }
    true
}

/// True when all 27 units satisfy the uniqueness invariant.
pub fn grid_is_valid(grid: &Grid) -> bool {
    (0..9).all(|k| unit_is_valid(&grid.unit(units::row_of(k * 9))))
        && (0..9).all(|k| unit_is_valid(&grid.unit(units::column_of(k))))
        && BOX_ANCHORS
            .iter()
            .all(|&a| unit_is_valid(&grid.unit(units::box_of(a))))
}
