//! Puzzle generation: randomized backtracking fill plus strategic cell
//! removal.
//!
//! Generation is a two-step pipeline. [`Generator::fill_grid`] produces a
//! complete solution by depth-first search with a freshly shuffled digit
//! order at every cell, which is what makes solutions differ across runs.
//! [`Generator::remove_cells`] then clears randomly sampled cells toward the
//! level's target count. Neither step verifies that the resulting puzzle has
//! a unique solution; that is a deliberate trade-off, documented on
//! [`Generator::generate`].

use crate::{Grid, Position};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

/// Sampling ceiling for the removal loop. Every sampled cell counts against
/// it, hit or miss, so removal always terminates even when sampling keeps
/// landing on already-cleared cells.
pub const MAX_REMOVAL_ATTEMPTS: usize = 500;

/// Requested generation level, indexed 1 (fewest removals) through 6 (most).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
    Extreme,
}

impl Level {
    /// All levels, ordered by index.
    pub fn all() -> &'static [Level] {
        &[
            Level::VeryEasy,
            Level::Easy,
            Level::Medium,
            Level::Hard,
            Level::VeryHard,
            Level::Extreme,
        ]
    }

    /// Level for a numeric index 1..=6.
    pub fn from_index(index: u8) -> Result<Level, GenerateError> {
        match index {
            1 => Ok(Level::VeryEasy),
            2 => Ok(Level::Easy),
            3 => Ok(Level::Medium),
            4 => Ok(Level::Hard),
            5 => Ok(Level::VeryHard),
            6 => Ok(Level::Extreme),
            _ => Err(GenerateError::InvalidLevel(index)),
        }
    }

    /// Numeric index of this level, 1..=6.
    pub fn index(&self) -> u8 {
        match self {
            Level::VeryEasy => 1,
            Level::Easy => 2,
            Level::Medium => 3,
            Level::Hard => 4,
            Level::VeryHard => 5,
            Level::Extreme => 6,
        }
    }

    /// Number of cells the remover aims to clear for this level.
    pub fn removal_count(&self) -> usize {
        match self {
            Level::VeryEasy => 35,
            Level::Easy => 40,
            Level::Medium => 45,
            Level::Hard => 50,
            Level::VeryHard => 55,
            Level::Extreme => 60,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::VeryEasy => write!(f, "Very Easy"),
            Level::Easy => write!(f, "Easy"),
            Level::Medium => write!(f, "Medium"),
            Level::Hard => write!(f, "Hard"),
            Level::VeryHard => write!(f, "Very Hard"),
            Level::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Errors from puzzle generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Level index outside 1..=6. Rejected before any search begins.
    InvalidLevel(u8),
    /// The backtracking search could not complete the grid. A fresh attempt
    /// is independent and may be retried by the caller.
    FillExhausted,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(index) => {
                write!(f, "invalid level {} (expected 1..=6)", index)
            }
            Self::FillExhausted => write!(f, "backtracking search exhausted without a solution"),
        }
    }
}

impl std::error::Error for GenerateError {}

/// A generated puzzle together with its solution and removal accounting.
///
/// `removed` may fall short of `requested` when the sampling ceiling is
/// reached first; that is a quality degradation, not an error, and this
/// struct is where it stays observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub puzzle: Grid,
    pub solution: Grid,
    pub level: Level,
    /// Cells actually cleared from the solution.
    pub removed: usize,
    /// The level's removal target.
    pub requested: usize,
}

impl GeneratedPuzzle {
    /// Whether the remover hit its attempt ceiling before the target.
    pub fn is_under_removed(&self) -> bool {
        self.removed < self.requested
    }
}

/// Sudoku puzzle generator.
///
/// Owns its pseudorandom source, so independent generators on separate
/// threads never contend; seed one explicitly for reproducible output.
pub struct Generator {
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a puzzle and its solution for a level index 1..=6.
    ///
    /// The puzzle is derived from the solution by random cell removal; every
    /// remaining digit matches the solution at that coordinate. Uniqueness of
    /// the puzzle's solution is not checked — aggressive removal can leave a
    /// grid with several completions.
    pub fn generate(&mut self, level: u8) -> Result<GeneratedPuzzle, GenerateError> {
        let level = Level::from_index(level)?;
        let solution = self.fill_grid()?;
        let (puzzle, removed) = self.remove_cells(&solution, level);
        debug!(
            "generated level {} puzzle ({} cells cleared)",
            level.index(),
            removed
        );
        Ok(GeneratedPuzzle {
            puzzle,
            solution,
            level,
            removed,
            requested: level.removal_count(),
        })
    }

    /// Produce a complete, valid solution grid by randomized backtracking.
    ///
    /// Cells are visited in row-major order; each one tries the digits 1-9
    /// in a freshly shuffled order and recurses, undoing the placement when
    /// the recursion dead-ends. From an empty grid the search always
    /// completes in practice, but exhaustion is still surfaced as an error
    /// rather than assumed away.
    pub fn fill_grid(&mut self) -> Result<Grid, GenerateError> {
        let mut grid = Grid::new();
        if self.fill_from(&mut grid, 0) {
            Ok(grid)
        } else {
            Err(GenerateError::FillExhausted)
        }
    }

    fn fill_from(&mut self, grid: &mut Grid, start: usize) -> bool {
        for idx in start..81 {
            let pos = Position::from_index(idx);
            if !grid.is_cell_empty(pos) {
                continue;
            }

            let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
            self.shuffle(&mut digits);

            for &digit in &digits {
                if grid.placement_allowed(pos, digit) {
                    grid.set(pos, digit);
                    if self.fill_from(grid, idx + 1) {
                        return true;
                    }
                    trace!("backtracking from {}", pos);
                    grid.clear(pos);
                }
            }

            // Every digit conflicts here: report failure upward immediately.
            return false;
        }
        true
    }

    /// Derive a puzzle by clearing up to `level.removal_count()` cells from a
    /// copy of `solution`, returning the puzzle and the actual cleared count.
    ///
    /// Cells are sampled uniformly at random; a sample landing on an
    /// already-cleared cell still consumes one of the
    /// [`MAX_REMOVAL_ATTEMPTS`] attempts. Falling short of the target is
    /// reported through the count, never as an error.
    pub fn remove_cells(&mut self, solution: &Grid, level: Level) -> (Grid, usize) {
        let target = level.removal_count();
        let mut puzzle = *solution;
        let mut removed = 0;
        let mut attempts = 0;

        while removed < target && attempts < MAX_REMOVAL_ATTEMPTS {
            let pos = Position::new(self.rng.next_usize(9), self.rng.next_usize(9));
            if !puzzle.is_cell_empty(pos) {
                puzzle.clear(pos);
                removed += 1;
            }
            attempts += 1;
        }

        debug!("cleared {} of {} cells in {} attempts", removed, target, attempts);
        if removed < target {
            warn!(
                "removal ceiling reached: cleared {} of {} cells",
                removed, target
            );
        }
        (puzzle, removed)
    }

    /// Shuffle a slice using Fisher-Yates.
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.rng.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

/// Minimal PCG-style PRNG, seeded from `getrandom`.
///
/// Each generator owns one, which keeps concurrent generation safe without
/// any shared state and makes seeded runs exactly reproducible.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: a static counter still yields distinct streams.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}
