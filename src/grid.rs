//! The 9x9 grid and its coordinate type.
//!
//! A [`Grid`] is a plain value: 81 digits, 0 meaning empty. Components never
//! share a grid; handing one off always copies it, so no caller can observe
//! another component's working state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the 9x9 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Iterate all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..81).map(Self::from_index)
    }

    /// Position for a linear cell index 0..81, row-major.
    pub(crate) fn from_index(idx: usize) -> Self {
        Self::new(idx / 9, idx % 9)
    }

    /// Top-left corner of the 3x3 box containing this position.
    fn box_origin(&self) -> (usize, usize) {
        ((self.row / 3) * 3, (self.col / 3) * 3)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row + 1, self.col + 1)
    }
}

/// A 9x9 Sudoku grid. 0 is an empty cell, 1-9 are placed digits.
///
/// Serializes as the bare 9x9 integer matrix, which is the shape every
/// consumer (renderer, file writer, display widget) exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from a raw 9x9 matrix. Values are taken as-is; callers
    /// are expected to pass digits 0-9.
    pub fn from_rows(cells: [[u8; 9]; 9]) -> Self {
        Self { cells }
    }

    /// The raw 9x9 matrix.
    pub fn rows(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Digit at `pos`, 0 if empty.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col]
    }

    /// Place `value` at `pos`. No legality check is performed.
    pub fn set(&mut self, pos: Position, value: u8) {
        self.cells[pos.row][pos.col] = value;
    }

    /// Clear the cell at `pos`.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = 0;
    }

    /// Whether the cell at `pos` is empty.
    pub fn is_cell_empty(&self, pos: Position) -> bool {
        self.get(pos) == 0
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        81 - self.empty_count()
    }

    /// Whether every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.empty_count() == 0
    }

    /// Whether `digit` may be placed at `pos`: it must not already appear in
    /// the same row, the same column, or the containing 3x3 box.
    pub fn placement_allowed(&self, pos: Position, digit: u8) -> bool {
        for i in 0..9 {
            if self.cells[pos.row][i] == digit || self.cells[i][pos.col] == digit {
                return false;
            }
        }
        let (box_row, box_col) = pos.box_origin();
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                if self.cells[r][c] == digit {
                    return false;
                }
            }
        }
        true
    }

    /// Whether this grid is a complete, valid solution: every row, column,
    /// and 3x3 box contains each digit 1-9 exactly once.
    pub fn is_valid_solution(&self) -> bool {
        const ALL_DIGITS: u16 = 0b11_1111_1110;

        let mut rows = [0u16; 9];
        let mut cols = [0u16; 9];
        let mut boxes = [0u16; 9];
        for pos in Position::all() {
            let digit = self.get(pos);
            if digit == 0 {
                return false;
            }
            let bit = 1u16 << digit;
            let box_idx = (pos.row / 3) * 3 + pos.col / 3;
            if rows[pos.row] & bit != 0 || cols[pos.col] & bit != 0 || boxes[box_idx] & bit != 0 {
                return false;
            }
            rows[pos.row] |= bit;
            cols[pos.col] |= bit;
            boxes[box_idx] |= bit;
        }
        rows.iter()
            .chain(&cols)
            .chain(&boxes)
            .all(|&seen| seen == ALL_DIGITS)
    }

    /// Parse a grid from 81 digit characters; `0` and `.` mean empty and
    /// whitespace is ignored. Returns `None` on any other input.
    pub fn from_string(s: &str) -> Option<Grid> {
        let mut grid = Grid::new();
        let mut idx = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            if idx >= 81 {
                return None;
            }
            let value = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            grid.set(Position::from_index(idx), value);
            idx += 1;
        }
        if idx == 81 {
            Some(grid)
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    /// Nine rows of nine characters, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &value in row {
                if value == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    const PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    #[test]
    fn test_from_string_round_trip() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), 5);
        assert_eq!(grid.get(Position::new(0, 2)), 0);
        assert_eq!(Grid::from_string(&grid.to_string()), Some(grid));
    }

    #[test]
    fn test_from_string_rejects_bad_input() {
        assert!(Grid::from_string("12345").is_none());
        assert!(Grid::from_string(&"x".repeat(81)).is_none());
        assert!(Grid::from_string(&"1".repeat(82)).is_none());
    }

    #[test]
    fn test_valid_solution() {
        let grid = Grid::from_string(SOLVED).unwrap();
        assert!(grid.is_complete());
        assert!(grid.is_valid_solution());
    }

    #[test]
    fn test_incomplete_grid_is_not_a_solution() {
        let mut grid = Grid::from_string(SOLVED).unwrap();
        grid.clear(Position::new(4, 4));
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn test_duplicate_breaks_solution() {
        let mut grid = Grid::from_string(SOLVED).unwrap();
        // Row 0 already contains a 5 at column 0.
        grid.set(Position::new(0, 1), 5);
        assert!(!grid.is_valid_solution());
    }

    #[test]
    fn test_placement_allowed() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        let pos = Position::new(0, 2);
        // Row 0 holds 5, 3, 7; column 2 holds 8; the box holds 5, 3, 6, 9, 8.
        assert!(!grid.placement_allowed(pos, 5));
        assert!(!grid.placement_allowed(pos, 9));
        assert!(grid.placement_allowed(pos, 4));
    }

    #[test]
    fn test_counts() {
        let grid = Grid::from_string(PUZZLE).unwrap();
        assert_eq!(grid.filled_count(), 30);
        assert_eq!(grid.empty_count(), 51);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_serde_plain_matrix() {
        let grid = Grid::from_string(SOLVED).unwrap();
        let value = serde_json::to_value(grid).unwrap();
        // The wire shape is the bare 9x9 matrix.
        assert_eq!(value[0][0], 5);
        assert_eq!(value.as_array().unwrap().len(), 9);
        let back: Grid = serde_json::from_value(value).unwrap();
        assert_eq!(back, grid);
    }
}
