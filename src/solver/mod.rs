//! Constraint solver: per-cell candidates, naked-single detection, hint
//! sequencing, and difficulty assessment.
//!
//! The only deduction strategy implemented is the naked single (a cell whose
//! candidate set has exactly one member). The sequencer re-derives candidates
//! from scratch after every placement rather than tracking them
//! incrementally; for a 9x9 grid the full rescan is cheap and keeps the loop
//! trivially correct.

mod types;

use crate::{Grid, Position};
use log::debug;

pub use types::{CandidateSet, Difficulty, Hint};

/// Default bound for [`Solver::hint_sequence`].
pub const DEFAULT_MAX_HINTS: usize = 15;

/// Hint bound probed by [`Solver::assess`].
pub const ASSESS_HINT_BOUND: usize = 5;

/// Unit struct solver — stateless, all state is per-call.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Candidate digits for the cell at `pos`: {1..9} minus every digit
    /// already present in the same row, column, and 3x3 box. A filled cell
    /// has no candidates.
    pub fn candidates(&self, grid: &Grid, pos: Position) -> CandidateSet {
        if !grid.is_cell_empty(pos) {
            return CandidateSet::empty();
        }
        let mut candidates = CandidateSet::full();
        for i in 0..9 {
            candidates.remove(grid.get(Position::new(pos.row, i)));
            candidates.remove(grid.get(Position::new(i, pos.col)));
        }
        let box_row = (pos.row / 3) * 3;
        let box_col = (pos.col / 3) * 3;
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                candidates.remove(grid.get(Position::new(r, c)));
            }
        }
        candidates
    }

    /// All naked singles in `grid`, in row-major scan order.
    ///
    /// The order is a contract: consumers display hints in exactly this
    /// order, earliest cell first.
    pub fn naked_singles(&self, grid: &Grid) -> Vec<Hint> {
        let mut singles = Vec::new();
        for pos in Position::all() {
            if !grid.is_cell_empty(pos) {
                continue;
            }
            if let Some(value) = self.candidates(grid, pos).sole_value() {
                singles.push(Hint { pos, value });
            }
        }
        singles
    }

    /// Up to `max_hints` successive deductions against a working copy of
    /// `grid`. Each round takes the row-major-earliest naked single and
    /// applies it before the next round, since one placement can newly
    /// constrain other cells. Stops early once no naked single remains;
    /// the caller's grid is never touched.
    pub fn hint_sequence(&self, grid: &Grid, max_hints: usize) -> Vec<Hint> {
        let mut working = *grid;
        let mut hints = Vec::new();
        for _ in 0..max_hints {
            match self.naked_singles(&working).first() {
                Some(&hint) => {
                    working.set(hint.pos, hint.value);
                    hints.push(hint);
                }
                None => break,
            }
        }
        debug!("derived {} of up to {} hints", hints.len(), max_hints);
        hints
    }

    /// Assess apparent difficulty from the naked-single yield of the first
    /// few hints. Coarse by design: it probes one strategy over at most
    /// [`ASSESS_HINT_BOUND`] steps and nothing else.
    pub fn assess(&self, grid: &Grid) -> (Difficulty, usize) {
        let hints = self.hint_sequence(grid, ASSESS_HINT_BOUND);
        let difficulty = match hints.len() {
            n if n >= 4 => Difficulty::Easy,
            n if n >= 2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        };
        debug!("assessed {} ({} quick hints)", difficulty, hints.len());
        (difficulty, hints.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn solved_grid() -> Grid {
        Grid::from_string(SOLVED).unwrap()
    }

    #[test]
    fn test_candidates_on_empty_grid() {
        let solver = Solver::new();
        let grid = Grid::new();
        for pos in Position::all() {
            assert_eq!(solver.candidates(&grid, pos), CandidateSet::full());
        }
    }

    #[test]
    fn test_candidates_filled_cell_is_empty_set() {
        let solver = Solver::new();
        let grid = solved_grid();
        assert!(solver.candidates(&grid, Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_candidates_idempotent() {
        let solver = Solver::new();
        let mut grid = solved_grid();
        grid.clear(Position::new(3, 3));
        grid.clear(Position::new(3, 4));
        let pos = Position::new(3, 3);
        let first = solver.candidates(&grid, pos);
        for _ in 0..5 {
            assert_eq!(solver.candidates(&grid, pos), first);
        }
    }

    #[test]
    fn test_naked_single_on_forced_cell() {
        let solver = Solver::new();
        let mut grid = solved_grid();
        let pos = Position::new(4, 4);
        let forced = grid.get(pos);
        grid.clear(pos);

        let singles = solver.naked_singles(&grid);
        assert_eq!(singles, vec![Hint { pos, value: forced }]);
    }

    #[test]
    fn test_naked_singles_row_major_order() {
        let solver = Solver::new();
        let mut grid = solved_grid();
        let later = Position::new(6, 2);
        let earlier = Position::new(2, 7);
        grid.clear(later);
        grid.clear(earlier);

        let singles = solver.naked_singles(&grid);
        assert_eq!(singles.len(), 2);
        assert_eq!(singles[0].pos, earlier);
        assert_eq!(singles[1].pos, later);
    }

    #[test]
    fn test_hint_sequence_bound_and_distinct_cells() {
        let solver = Solver::new();
        let solution = solved_grid();
        let mut grid = solution;
        for pos in [
            Position::new(0, 0),
            Position::new(1, 4),
            Position::new(3, 8),
            Position::new(5, 2),
            Position::new(7, 6),
            Position::new(8, 8),
        ] {
            grid.clear(pos);
        }

        let hints = solver.hint_sequence(&grid, 5);
        assert!(hints.len() <= 5);

        let cells: HashSet<Position> = hints.iter().map(|h| h.pos).collect();
        assert_eq!(cells.len(), hints.len(), "a cell was hinted twice");

        for hint in &hints {
            assert_eq!(hint.value, solution.get(hint.pos));
        }
    }

    #[test]
    fn test_hint_sequence_stops_when_exhausted() {
        let solver = Solver::new();
        // No cell on an empty grid is constrained at all.
        let hints = solver.hint_sequence(&Grid::new(), DEFAULT_MAX_HINTS);
        assert!(hints.is_empty());
    }

    #[test]
    fn test_hint_sequence_leaves_input_unchanged() {
        let solver = Solver::new();
        let mut grid = solved_grid();
        grid.clear(Position::new(0, 0));
        let before = grid;
        solver.hint_sequence(&grid, DEFAULT_MAX_HINTS);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_assess_thresholds() {
        let solver = Solver::new();

        // Five forced cells yield the full probe bound of hints.
        let mut easy = solved_grid();
        for col in 0..5 {
            easy.clear(Position::new(0, col));
        }
        let (difficulty, count) = solver.assess(&easy);
        assert_eq!(difficulty, Difficulty::Easy);
        assert_eq!(count, 5);

        // An empty grid yields no naked singles at all.
        let (difficulty, count) = solver.assess(&Grid::new());
        assert_eq!(difficulty, Difficulty::Hard);
        assert_eq!(count, 0);
    }
}
