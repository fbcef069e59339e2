use crate::Position;
use serde::{Deserialize, Serialize};

/// Assessed difficulty of a puzzle.
///
/// This is a coarse heuristic over a single deduction strategy (naked
/// singles), not a calibrated rating: it only reflects how far simple
/// elimination gets on the opening position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// A single deduction: `value` is the only legal digit for the cell at `pos`
/// in the working puzzle the hint was derived against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub pos: Position,
    pub value: u8,
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.pos, self.value)
    }
}

/// Candidate digits for one cell, stored as a bitmask over 1-9.
///
/// Iteration yields digits in ascending order, but callers must not rely on
/// any particular order; only [`naked_singles`](crate::Solver::naked_singles)
/// output order is a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateSet(u16);

const ALL_DIGITS: u16 = 0b11_1111_1110;

impl CandidateSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self(0)
    }

    /// The full set {1..9}.
    pub fn full() -> Self {
        Self(ALL_DIGITS)
    }

    /// Add a digit. Values outside 1-9 (notably 0, the empty-cell marker)
    /// are ignored.
    pub fn insert(&mut self, digit: u8) {
        if (1..=9).contains(&digit) {
            self.0 |= 1 << digit;
        }
    }

    /// Remove a digit. Values outside 1-9 are ignored.
    pub fn remove(&mut self, digit: u8) {
        if (1..=9).contains(&digit) {
            self.0 &= !(1 << digit);
        }
    }

    /// Whether the set contains `digit`.
    pub fn contains(&self, digit: u8) -> bool {
        (1..=9).contains(&digit) && self.0 & (1 << digit) != 0
    }

    /// Number of digits in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The single member, if the set is a singleton.
    pub fn sole_value(&self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Iterate the digits in the set, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=9).filter(|&d| self.contains(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_set_basics() {
        let mut set = CandidateSet::full();
        assert_eq!(set.len(), 9);
        assert!(set.contains(1) && set.contains(9));

        set.remove(4);
        assert!(!set.contains(4));
        assert_eq!(set.len(), 8);

        // The empty-cell marker is not a digit and must be a no-op.
        set.remove(0);
        set.insert(0);
        assert_eq!(set.len(), 8);

        set.insert(4);
        assert_eq!(set, CandidateSet::full());
    }

    #[test]
    fn test_sole_value() {
        let mut set = CandidateSet::empty();
        assert_eq!(set.sole_value(), None);
        set.insert(7);
        assert_eq!(set.sole_value(), Some(7));
        set.insert(2);
        assert_eq!(set.sole_value(), None);
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = CandidateSet::empty();
        set.insert(8);
        set.insert(1);
        set.insert(5);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 5, 8]);
    }

    #[test]
    fn test_hint_display() {
        let hint = Hint {
            pos: Position::new(0, 4),
            value: 3,
        };
        assert_eq!(hint.to_string(), "R1C5=3");
    }
}
