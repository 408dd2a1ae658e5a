//! Exhaustive backtracking search over the empty cells.

use crate::digit_set::DigitSet;
use crate::grid::Grid;
use crate::units;
use crate::validate::grid_is_valid;

/// Depth-first backtracking solver.
///
/// The search always targets the first empty cell in row-major order and
/// tries candidates in ascending numeric order, so for a given input the
/// result is deterministic. Puzzles with several solutions yield the one
/// that is lexicographically first under that ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Solve a puzzle, returning the completed grid or `None` when the
    /// givens conflict or no completion exists. The input is untouched;
    /// the search runs on a private copy.
    pub fn solve(&self, puzzle: &Grid) -> Option<Grid> {
        if !grid_is_valid(puzzle) {
            return None;
        }
        let mut grid = puzzle.clone();
        if solve_recursive(&mut grid) {
            Some(grid)
        } else {
            None
        }
    }

    /// Solve a puzzle in the 81-character line format, returning the
    /// solution in the same format. `None` for malformed input as well as
    /// for unsolvable puzzles; callers that need to tell those apart parse
    /// and validate up front.
    pub fn solve_line(&self, line: &str) -> Option<String> {
        let puzzle = Grid::from_line(line)?;
        self.solve(&puzzle).map(|solution| solution.to_line())
    }
}

fn solve_recursive(grid: &mut Grid) -> bool {
    let idx = match grid.first_empty() {
        Some(idx) => idx,
        None => return true,
    };
    let candidates = DigitSet::all().difference(units::peer_digits(grid, idx));
    for digit in candidates.iter() {
        grid.set_at(idx, Some(digit));
        if solve_recursive(grid) {
            return true;
        }
    }
    // Every candidate failed; restore the cell before unwinding.
    grid.set_at(idx, None);
    false
}
