//! Core Sudoku solving engine.
//!
//! The crate is layered leaf-first: [`units`] computes row/column/box
//! membership from a linear cell index, [`grid_is_valid`] checks the
//! uniqueness invariant over all 27 units, and [`Solver`] runs exhaustive
//! backtracking over the empty cells. [`Grid`] is the only data carrier: 81 cells in
//! row-major order, convertible to and from an 81-character line where any
//! character outside `'1'..='9'` denotes an empty cell.

mod digit_set;
mod grid;
mod solver;
pub mod units;
mod validate;

pub use digit_set::DigitSet;
pub use grid::{Cell, Grid, Position, CELL_COUNT, EMPTY_CHAR};
pub use solver::Solver;
pub use validate::{grid_is_valid, unit_is_valid};
