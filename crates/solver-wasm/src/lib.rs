//! WebAssembly bindings for the Sudoku solver.
//!
//! The browser side keeps the whole board as an 81-character line, so the
//! interface here is string in, string out. Any character outside
//! `'1'..='9'` in the input denotes an empty cell.

use solver_core::{grid_is_valid, Grid, Solver};
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Solve a board given in the 81-character line format.
///
/// Returns the solved board in the same format, or `undefined` when the
/// input is malformed, conflicting, or unsolvable.
#[wasm_bindgen]
pub fn solve_board(board: &str) -> Option<String> {
    Solver::new().solve_line(board)
}

/// True when the board parses and no row, column, or box contains a
/// duplicate digit. Empty and partially filled boards count as valid.
#[wasm_bindgen]
pub fn board_is_valid(board: &str) -> bool {
    match Grid::from_line(board) {
        Some(grid) => grid_is_valid(&grid),
        None => false,
    }
}

/// True when the board parses, is completely filled, and satisfies the
/// uniqueness invariant in all 27 units.
#[wasm_bindgen]
pub fn board_is_solved(board: &str) -> bool {
    match Grid::from_line(board) {
        Some(grid) => grid.is_complete() && grid_is_valid(&grid),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "53--7----6--195----98----6-8---6---34--8-3--17---2---6-6----28----419--5----8--79";
    const SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    #[test]
    fn test_solve_board() {
        assert_eq!(solve_board(PUZZLE).as_deref(), Some(SOLUTION));
    }

    #[test]
    fn test_solve_board_rejects_bad_input() {
        assert!(solve_board("123").is_none());
        let mut conflicting = String::from("11");
        conflicting.push_str(&"-".repeat(79));
        assert!(solve_board(&conflicting).is_none());
    }

    #[test]
    fn test_board_is_valid() {
        assert!(board_is_valid(PUZZLE));
        assert!(board_is_valid(&"-".repeat(81)));
        assert!(!board_is_valid("123"));

        let mut conflicting = String::from("22");
        conflicting.push_str(&"-".repeat(79));
        assert!(!board_is_valid(&conflicting));
    }

    #[test]
    fn test_board_is_solved() {
        assert!(board_is_solved(SOLUTION));
        assert!(!board_is_solved(PUZZLE));
        assert!(!board_is_solved(&"-".repeat(81)));
    }
}
