#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Puzzle generation: difficulty tiers, the generator interface the solver
//! consumes puzzles from, and a built-in word bank for offline use.
//!
//! The solver does not trust a generator's output to be solvable beyond its
//! own structural checks; an unsolvable candidate simply yields no mapping.

use crate::cryptarithm::puzzle::Puzzle;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Coarse difficulty tiers, mapped to target distinct-letter-count ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Few unique letters (at most 5) and short words.
    Easy,
    /// 6 to 8 unique letters.
    Medium,
    /// 9 or 10 unique letters.
    Hard,
}

impl Difficulty {
    /// The distinct-letter-count range a puzzle of this tier should fall in.
    #[must_use]
    pub const fn letter_range(self) -> RangeInclusive<usize> {
        match self {
            Self::Easy => 2..=5,
            Self::Medium => 6..=8,
            Self::Hard => 9..=10,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(format!("unknown difficulty {other:?}")),
        }
    }
}

/// A source of candidate puzzles for a requested difficulty tier.
///
/// Implementations return puzzles *believed* solvable; `None` means the
/// generator could not produce a candidate at all.
pub trait PuzzleGenerator {
    /// Produces one candidate puzzle for `difficulty`.
    fn generate(&mut self, difficulty: Difficulty) -> Option<Puzzle>;
}

// Known-solvable puzzles, grouped by distinct-letter count.
const EASY_BANK: &[(&str, &str, &str)] = &[
    ("SO", "SO", "TOO"),
    ("I", "BB", "ILL"),
    ("AS", "A", "MOM"),
    ("TO", "GO", "OUT"),
];

const MEDIUM_BANK: &[(&str, &str, &str)] = &[
    ("SEND", "MORE", "MONEY"),
    ("BASE", "BALL", "GAMES"),
    ("EAT", "THAT", "APPLE"),
];

const HARD_BANK: &[(&str, &str, &str)] = &[
    ("CROSS", "ROADS", "DANGER"),
    ("COUPLE", "COUPLE", "QUARTET"),
];

/// A [`PuzzleGenerator`] drawing uniformly from a curated bank of
/// known-solvable puzzles per tier.
#[derive(Debug, Clone)]
pub struct WordBank {
    rng: fastrand::Rng,
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new()
    }
}

impl WordBank {
    /// A bank with a randomly seeded picker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// A bank with a fixed seed, for reproducible picks.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl PuzzleGenerator for WordBank {
    fn generate(&mut self, difficulty: Difficulty) -> Option<Puzzle> {
        let bank = match difficulty {
            Difficulty::Easy => EASY_BANK,
            Difficulty::Medium => MEDIUM_BANK,
            Difficulty::Hard => HARD_BANK,
        };
        let (addend1, addend2, sum) = bank[self.rng.usize(..bank.len())];
        Some(Puzzle::new(addend1, addend2, sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cryptarithm::solver::{Solver, verify};

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("MEDIUM".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!("Hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_difficulty_roundtrips_display() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_bank_entries_match_their_tier() {
        let tiers = [
            (Difficulty::Easy, EASY_BANK),
            (Difficulty::Medium, MEDIUM_BANK),
            (Difficulty::Hard, HARD_BANK),
        ];
        for (difficulty, bank) in tiers {
            for &(a, b, s) in bank {
                let puzzle = Puzzle::new(a, b, s);
                assert!(
                    puzzle.is_structurally_feasible(),
                    "{puzzle} is not feasible"
                );
                assert!(
                    difficulty.letter_range().contains(&puzzle.letters().len()),
                    "{puzzle} has {} letters, outside the {difficulty} range",
                    puzzle.letters().len()
                );
            }
        }
    }

    #[test]
    fn test_easy_and_medium_banks_solve() {
        for &(a, b, s) in EASY_BANK.iter().chain(MEDIUM_BANK) {
            let puzzle = Puzzle::new(a, b, s);
            let mapping = Solver::new(puzzle.clone())
                .solve()
                .unwrap_or_else(|| panic!("{puzzle} did not solve"));
            assert!(verify(&puzzle, &mapping));
        }
    }

    #[test]
    fn test_seeded_bank_is_reproducible() {
        let mut first = WordBank::with_seed(42);
        let mut second = WordBank::with_seed(42);
        for _ in 0..8 {
            assert_eq!(
                first.generate(Difficulty::Medium),
                second.generate(Difficulty::Medium)
            );
        }
    }

    #[test]
    fn test_generate_respects_requested_tier() {
        let mut bank = WordBank::with_seed(7);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let puzzle = bank.generate(difficulty).expect("bank always produces");
            assert!(difficulty.letter_range().contains(&puzzle.letters().len()));
        }
    }
}
