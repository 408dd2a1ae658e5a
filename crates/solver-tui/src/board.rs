use solver_core::{units, Grid, Position, CELL_COUNT};

/// The editable board behind the TUI.
///
/// Wraps a [`Grid`] and remembers which cells the user typed, so the
/// renderer can distinguish hand-entered digits from the ones a solve
/// filled in.
pub struct Board {
    grid: Grid,
    entered: [bool; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an all-empty board.
    pub fn new() -> Self {
        Self {
            grid: Grid::empty(),
            entered: [false; CELL_COUNT],
        }
    }

    /// Build a board from the 81-character line format. Every filled cell
    /// counts as user-entered.
    pub fn from_line(line: &str) -> Option<Self> {
        let grid = Grid::from_line(line)?;
        let mut entered = [false; CELL_COUNT];
        for (idx, slot) in entered.iter_mut().enumerate() {
            *slot = grid.at(idx).is_some();
        }
        Some(Self { grid, entered })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Type a digit into a cell.
    pub fn set(&mut self, pos: Position, value: u8) {
        self.grid.set(pos, Some(value));
        self.entered[pos.index()] = true;
    }

    /// Clear one cell, whether typed or solver-filled.
    pub fn clear_cell(&mut self, pos: Position) {
        self.grid.set(pos, None);
        self.entered[pos.index()] = false;
    }

    /// Clear the whole board.
    pub fn clear(&mut self) {
        self.grid = Grid::empty();
        self.entered = [false; CELL_COUNT];
    }

    /// Copy a solution into the board. Cells the user typed keep their
    /// entered flag; everything the solve filled in stays unflagged.
    pub fn apply_solution(&mut self, solution: &Grid) {
        self.grid = solution.clone();
    }

    pub fn is_entered(&self, pos: Position) -> bool {
        self.entered[pos.index()]
    }

    /// True when the digit at `pos` also occurs in another cell of its
    /// row, column, or box. Empty cells never conflict.
    pub fn has_conflict(&self, pos: Position) -> bool {
        let idx = pos.index();
        let value = match self.grid.at(idx) {
            Some(v) => v,
            None => return false,
        };
        for indices in [units::row_of(idx), units::column_of(idx), units::box_of(idx)] {
            for other in indices {
                if other != idx && self.grid.at(other) == Some(value) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_core::Solver;

    const PUZZLE: &str =
        "53--7----6--195----98----6-8---6---34--8-3--17---2---6-6----28----419--5----8--79";

    #[test]
    fn test_from_line_marks_givens_entered() {
        let board = Board::from_line(PUZZLE).unwrap();
        assert!(board.is_entered(Position::new(0, 0)));
        assert!(!board.is_entered(Position::new(0, 2)));
    }

    #[test]
    fn test_set_and_clear_cell() {
        let mut board = Board::new();
        let pos = Position::new(4, 4);
        board.set(pos, 7);
        assert_eq!(board.grid().get(pos), Some(7));
        assert!(board.is_entered(pos));

        board.clear_cell(pos);
        assert_eq!(board.grid().get(pos), None);
        assert!(!board.is_entered(pos));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = Board::from_line(PUZZLE).unwrap();
        board.clear();
        assert_eq!(board.grid().empty_count(), CELL_COUNT);
        assert!(!board.is_entered(Position::new(0, 0)));
    }

    #[test]
    fn test_apply_solution_keeps_entered_flags() {
        let mut board = Board::from_line(PUZZLE).unwrap();
        let solution = Solver::new().solve(board.grid()).unwrap();
        board.apply_solution(&solution);

        assert!(board.grid().is_complete());
        // Typed givens stay flagged, the solver's digits do not.
        assert!(board.is_entered(Position::new(0, 0)));
        assert!(!board.is_entered(Position::new(0, 2)));
    }

    #[test]
    fn test_conflicts() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), 5);
        assert!(!board.has_conflict(Position::new(0, 0)));

        // Same row
        board.set(Position::new(0, 8), 5);
        assert!(board.has_conflict(Position::new(0, 0)));
        assert!(board.has_conflict(Position::new(0, 8)));

        board.clear_cell(Position::new(0, 8));
        // Same box, different row and column
        board.set(Position::new(1, 1), 5);
        assert!(board.has_conflict(Position::new(0, 0)));

        // Empty cells never conflict
        assert!(!board.has_conflict(Position::new(8, 8)));
    }
}
