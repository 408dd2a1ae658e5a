use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single cell: a digit 1-9, or `None` for empty.
pub type Cell = Option<u8>;

/// Number of cells in a classic 9x9 grid.
pub const CELL_COUNT: usize = 81;

/// Sentinel character for an empty cell in the line format.
pub const EMPTY_CHAR: char = '-';

/// A (row, col) coordinate on the grid, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Linear row-major index of this position.
    pub fn index(&self) -> usize {
        self.row * 9 + self.col
    }

    /// Position of a linear row-major index.
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: idx / 9,
            col: idx % 9,
        }
    }
}

/// A classic 9x9 grid: 81 cells in row-major order.
///
/// A grid lives for the duration of one solve call: it is built from
/// caller-supplied data, mutated in place during search, and either
/// returned solved or discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Create an all-empty grid.
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Parse a grid from an 81-character line.
    ///
    /// Characters `'1'..='9'` become values; every other character is an
    /// empty cell, so callers never need to pre-sanitize. Returns `None`
    /// when the input is not exactly 81 characters long.
    pub fn from_line(line: &str) -> Option<Self> {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != CELL_COUNT {
            return None;
        }
        let mut cells = [None; CELL_COUNT];
        for (i, c) in chars.into_iter().enumerate() {
            match c.to_digit(10) {
                Some(d) if d >= 1 => cells[i] = Some(d as u8),
                _ => {}
            }
        }
        Some(Self { cells })
    }

    /// Serialize to the 81-character line format, [`EMPTY_CHAR`] for
    /// empty cells.
    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Some(v) => char::from(b'0' + v),
                None => EMPTY_CHAR,
            })
            .collect()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Position, value: Cell) {
        self.cells[pos.index()] = value;
    }

    /// Cell at a linear row-major index.
    #[inline]
    pub fn at(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    #[inline]
    pub(crate) fn set_at(&mut self, idx: usize, value: Cell) {
        self.cells[idx] = value;
    }

    /// Index of the first empty cell in row-major order.
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|c| c.is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    pub fn filled_count(&self) -> usize {
        CELL_COUNT - self.empty_count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, "| ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(v) => write!(f, "{} ", v)?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        write!(f, "+-------+-------+-------+")
    }
}

// Serialized as the compact line form, the same shape the adapters pass
// around and persist.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_line())
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let line = String::deserialize(deserializer)?;
        Grid::from_line(&line).ok_or_else(|| {
            de::Error::invalid_length(line.chars().count(), &"an 81-character grid line")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "53--7----6--195----98----6-8---6---34--8-3--17---2---6-6----28----419--5----8--79";

    #[test]
    fn test_position_index_roundtrip() {
        for row in 0..9 {
            for col in 0..9 {
                let pos = Position::new(row, col);
                assert_eq!(Position::from_index(pos.index()), pos);
            }
        }
    }

    #[test]
    fn test_from_line_parses_digits_and_sentinels() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), Some(5));
        assert_eq!(grid.get(Position::new(0, 1)), Some(3));
        assert_eq!(grid.get(Position::new(0, 2)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(9));
        assert_eq!(grid.filled_count(), 30);
    }

    #[test]
    fn test_from_line_sanitizes_foreign_characters() {
        // '0', '.', letters, and spaces all denote empty cells.
        let mut line = String::from("12345678 .0xZ");
        line.push_str(&"-".repeat(CELL_COUNT - line.chars().count()));
        let grid = Grid::from_line(&line).unwrap();
        assert_eq!(grid.filled_count(), 8);
        assert_eq!(grid.at(8), None);
        assert_eq!(grid.at(10), None);
    }

    #[test]
    fn test_from_line_rejects_wrong_length() {
        assert!(Grid::from_line("123").is_none());
        assert!(Grid::from_line(&"-".repeat(82)).is_none());
        assert!(Grid::from_line("").is_none());
    }

    #[test]
    fn test_line_roundtrip() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        assert_eq!(grid.to_line(), PUZZLE);
    }

    #[test]
    fn test_first_empty_scans_row_major() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        assert_eq!(grid.first_empty(), Some(2));

        let mut full = Grid::empty();
        for idx in 0..CELL_COUNT {
            full.set_at(idx, Some(1));
        }
        assert_eq!(full.first_empty(), None);
        assert!(full.is_complete());
    }

    #[test]
    fn test_counts() {
        let empty = Grid::empty();
        assert_eq!(empty.empty_count(), 81);
        assert_eq!(empty.filled_count(), 0);
        assert!(!empty.is_complete());
    }

    #[test]
    fn test_display_draws_boxes() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        let text = grid.to_string();
        assert!(text.starts_with("+-------+-------+-------+"));
        assert!(text.contains("| 5 3 . | . 7 . | . . . |"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let grid = Grid::from_line(PUZZLE).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, format!("\"{}\"", PUZZLE));
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_serde_rejects_short_line() {
        let err = serde_json::from_str::<Grid>("\"53-\"");
        assert!(err.is_err());
    }
}
