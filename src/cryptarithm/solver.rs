use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::thread::JoinHandle;

use super::assignment::{Assignment, DigitUsage};
use super::puzzle::{MAX_DISTINCT_LETTERS, Puzzle};

/// A complete letter-to-digit mapping returned by a successful solve.
///
/// Distinct from "no solution" (`None`): an empty mapping is never returned,
/// since puzzles with empty words are structurally rejected.
pub type SolutionMapping = FxHashMap<char, u8>;

/// Counters collected during one solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveStats {
    /// Tentative digit placements made during search.
    pub decisions: usize,
    /// Complete assignments evaluated against the leading-zero and sum checks.
    pub leaf_checks: usize,
    /// Digit placements undone after a failed branch.
    pub backtracks: usize,
}

/// Exhaustive backtracking solver for one cryptarithmetic puzzle.
///
/// The search recurses over the puzzle's distinct letters in first-appearance
/// order, trying digits 0 through 9 ascending at each slot and skipping digits
/// already consumed. Constraints are checked only at the leaf: a complete
/// assignment is rejected if any word's leading letter maps to zero or if the
/// addends' values do not sum to the sum word's value. The first accepted
/// assignment wins and the search stops, so results are deterministic for a
/// given puzzle.
///
/// All rejection paths — structural infeasibility and exhausted search alike —
/// produce `None`; the solver never panics for well-typed string input.
#[derive(Debug)]
pub struct Solver {
    puzzle: Puzzle,
    letters: SmallVec<[char; MAX_DISTINCT_LETTERS]>,
    addend1_slots: Vec<usize>,
    addend2_slots: Vec<usize>,
    sum_slots: Vec<usize>,
    assignment: Assignment,
    used: DigitUsage,
    stats: SolveStats,
}

impl Solver {
    /// Prepares a solver for `puzzle`, enumerating its letters and resolving
    /// each word to letter-slot indices for cheap value computation at the
    /// leaves.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let letters = puzzle.letters();
        let slot_index: FxHashMap<char, usize> =
            letters.iter().enumerate().map(|(i, &c)| (c, i)).collect();

        let to_slots = |word: &str| -> Vec<usize> {
            word.chars()
                .filter_map(|c| slot_index.get(&c).copied())
                .collect()
        };

        Self {
            addend1_slots: to_slots(puzzle.addend1()),
            addend2_slots: to_slots(puzzle.addend2()),
            sum_slots: to_slots(puzzle.sum()),
            assignment: Assignment::new(letters.len()),
            used: DigitUsage::new(),
            stats: SolveStats::default(),
            letters,
            puzzle,
        }
    }

    /// The puzzle this solver was built for.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Counters from the most recent [`Self::solve`] call.
    #[must_use]
    pub const fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Runs the search and returns the first satisfying mapping, or `None`.
    ///
    /// Structurally infeasible puzzles (empty words, more than ten distinct
    /// letters, sum length outside the carry window) are rejected before any
    /// search. The returned mapping is a defensive copy; the working state is
    /// reset on every call, so repeated solves of the same puzzle return the
    /// identical mapping.
    pub fn solve(&mut self) -> Option<SolutionMapping> {
        self.assignment = Assignment::new(self.letters.len());
        self.used = DigitUsage::new();
        self.stats = SolveStats::default();

        if !self.puzzle.is_structurally_feasible() {
            return None;
        }

        if self.search(0) {
            Some(self.mapping())
        } else {
            None
        }
    }

    fn search(&mut self, slot: usize) -> bool {
        if slot == self.letters.len() {
            self.stats.leaf_checks += 1;
            return self.accepts();
        }

        for digit in 0..=9u8 {
            if self.used.is_used(digit) {
                continue;
            }

            self.assignment.set(slot, digit);
            self.used.mark(digit);
            self.stats.decisions += 1;

            if self.search(slot + 1) {
                return true;
            }

            self.used.release(digit);
            self.assignment.clear(slot);
            self.stats.backtracks += 1;
        }

        false
    }

    /// Leaf check: no leading zero in any word, and the equation holds.
    fn accepts(&self) -> bool {
        let leading_zero = [&self.addend1_slots, &self.addend2_slots, &self.sum_slots]
            .into_iter()
            .any(|slots| slots.first().and_then(|&s| self.assignment.digit(s)) == Some(0));
        if leading_zero {
            return false;
        }

        self.word_value(&self.addend1_slots) + self.word_value(&self.addend2_slots)
            == self.word_value(&self.sum_slots)
    }

    /// Base-10 positional value of a word, most-significant slot first.
    /// Words are at most ~10 digits, so `u64` cannot overflow.
    fn word_value(&self, slots: &[usize]) -> u64 {
        slots.iter().fold(0, |acc, &slot| {
            acc * 10 + u64::from(self.assignment.digit(slot).unwrap_or(0))
        })
    }

    fn mapping(&self) -> SolutionMapping {
        self.letters
            .iter()
            .enumerate()
            .filter_map(|(slot, &letter)| self.assignment.digit(slot).map(|d| (letter, d)))
            .collect()
    }
}

/// Solves a puzzle given as three words; see [`Solver::solve`].
#[must_use]
pub fn solve(addend1: &str, addend2: &str, sum: &str) -> Option<SolutionMapping> {
    Solver::new(Puzzle::new(addend1, addend2, sum)).solve()
}

/// Offloads a solve to a worker thread so a responsive caller is not blocked
/// during worst-case search times.
///
/// The search itself has no suspension points and accepts no cancellation; the
/// handle resolves once it runs to acceptance or exhaustion. Each call owns
/// its state outright, so any number of solves may run concurrently.
#[must_use]
pub fn solve_in_background(puzzle: Puzzle) -> JoinHandle<Option<SolutionMapping>> {
    std::thread::spawn(move || Solver::new(puzzle).solve())
}

/// Checks a mapping against a puzzle: every letter covered, all digits in
/// range and pairwise distinct, no leading zero, and the addition correct.
///
/// Used by the CLI's `--verify` flag and by tests; `solve` output always
/// passes.
#[must_use]
pub fn verify(puzzle: &Puzzle, mapping: &SolutionMapping) -> bool {
    let letters = puzzle.letters();
    if mapping.len() != letters.len() {
        return false;
    }

    let mut seen = DigitUsage::new();
    for letter in &letters {
        let Some(&digit) = mapping.get(letter) else {
            return false;
        };
        if digit > 9 || seen.is_used(digit) {
            return false;
        }
        seen.mark(digit);
    }

    let value = |word: &str| -> Option<u64> {
        word.chars()
            .map(|c| mapping.get(&c).map(|&d| u64::from(d)))
            .try_fold(0, |acc, d| Some(acc * 10 + d?))
    };

    let leading_nonzero = |word: &str| -> bool {
        word.chars()
            .next()
            .and_then(|c| mapping.get(&c))
            .is_some_and(|&d| d != 0)
    };

    if !leading_nonzero(puzzle.addend1())
        || !leading_nonzero(puzzle.addend2())
        || !leading_nonzero(puzzle.sum())
    {
        return false;
    }

    match (
        value(puzzle.addend1()),
        value(puzzle.addend2()),
        value(puzzle.sum()),
    ) {
        (Some(a), Some(b), Some(s)) => a + b == s,
        _ => false,
    }
}
