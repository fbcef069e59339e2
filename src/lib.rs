//! Core Sudoku engine: puzzle generation, naked-single hints, and difficulty
//! assessment.
//!
//! The engine is a pure library with no I/O and no shared state. It exposes
//! three operations to front ends, renderers, and batch scripts:
//!
//! - [`Generator::generate`] — build a `(puzzle, solution)` pair for a level
//!   index 1..=6, via randomized backtracking fill and random cell removal.
//! - [`Solver::hint_sequence`] — an ordered list of naked-single deductions
//!   against a working copy of a puzzle.
//! - [`Solver::assess`] — a coarse difficulty label derived from how many of
//!   those deductions are available up front.
//!
//! Grids are plain 9x9 matrices of digits (0 = empty) and serialize as such;
//! there is no engine-specific wire format. Every operation runs to
//! completion on the calling thread, and each [`Generator`] owns its random
//! source, so independent instances can be driven from separate threads.
//!
//! Generated puzzles are not guaranteed to have a unique solution; see
//! [`Generator::generate`].
//!
//! ```
//! use sudoku_engine::{Generator, Solver};
//!
//! let mut generator = Generator::with_seed(42);
//! let generated = generator.generate(3).expect("3 is a valid level");
//! assert!(generated.solution.is_valid_solution());
//!
//! let solver = Solver::new();
//! let hints = solver.hint_sequence(&generated.puzzle, 5);
//! assert!(hints.len() <= 5);
//! ```

mod generator;
mod grid;
mod solver;

pub use generator::{
    GenerateError, GeneratedPuzzle, Generator, Level, MAX_REMOVAL_ATTEMPTS,
};
pub use grid::{Grid, Position};
pub use solver::{
    CandidateSet, Difficulty, Hint, Solver, ASSESS_HINT_BOUND, DEFAULT_MAX_HINTS,
};
