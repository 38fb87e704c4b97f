use bit_vec::BitVec;
use core::ops::{Index, IndexMut};
use smallvec::SmallVec;

use super::puzzle::MAX_DISTINCT_LETTERS;

/// The state of one letter slot during search.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Default, Hash, PartialOrd, Ord)]
pub enum LetterState {
    /// No digit has been tried for this slot yet (or the last trial was undone).
    #[default]
    Unassigned,
    /// The slot currently holds this digit.
    Assigned(u8),
}

impl LetterState {
    /// Whether a digit is currently held.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// The held digit, if any.
    #[must_use]
    pub const fn digit(&self) -> Option<u8> {
        match self {
            Self::Assigned(d) => Some(*d),
            Self::Unassigned => None,
        }
    }
}

/// A partial letter-to-digit assignment, indexed by letter slot.
///
/// Slots correspond to positions in the puzzle's first-appearance letter
/// order. The assignment is mutated destructively during search: a digit is
/// placed on entry to a branch and removed again on backtrack, so no
/// snapshotting is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment(SmallVec<[LetterState; MAX_DISTINCT_LETTERS]>);

impl Index<usize> for Assignment {
    type Output = LetterState;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IndexMut<usize> for Assignment {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl Assignment {
    /// An all-unassigned state over `n` letter slots.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self(SmallVec::from_elem(LetterState::Unassigned, n))
    }

    /// Places `digit` into `slot`.
    pub fn set(&mut self, slot: usize, digit: u8) {
        self.0[slot] = LetterState::Assigned(digit);
    }

    /// Removes any digit from `slot`.
    pub fn clear(&mut self, slot: usize) {
        self.0[slot] = LetterState::Unassigned;
    }

    /// The digit held in `slot`, if any.
    #[must_use]
    pub fn digit(&self, slot: usize) -> Option<u8> {
        self.0[slot].digit()
    }

    /// Number of letter slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tracks which of the ten digits are consumed by the in-progress assignment.
///
/// Maintained in lockstep with [`Assignment`] so availability checks are O(1)
/// rather than a scan of the slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitUsage(BitVec);

impl Default for DigitUsage {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitUsage {
    /// All ten digits available.
    #[must_use]
    pub fn new() -> Self {
        Self(BitVec::from_elem(10, false))
    }

    /// Whether `digit` is currently consumed.
    #[must_use]
    pub fn is_used(&self, digit: u8) -> bool {
        self.0.get(usize::from(digit)).unwrap_or(false)
    }

    /// Marks `digit` consumed.
    pub fn mark(&mut self, digit: u8) {
        self.0.set(usize::from(digit), true);
    }

    /// Returns `digit` to the pool.
    pub fn release(&mut self, digit: u8) {
        self.0.set(usize::from(digit), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_set_and_clear() {
        let mut a = Assignment::new(3);
        assert_eq!(a.digit(1), None);

        a.set(1, 7);
        assert_eq!(a[1], LetterState::Assigned(7));
        assert_eq!(a.digit(1), Some(7));
        assert!(a[1].is_assigned());

        a.clear(1);
        assert_eq!(a[1], LetterState::Unassigned);
        assert_eq!(a.digit(1), None);
    }

    #[test]
    fn test_digit_usage_mark_release() {
        let mut used = DigitUsage::new();
        for d in 0..10 {
            assert!(!used.is_used(d));
        }

        used.mark(0);
        used.mark(9);
        assert!(used.is_used(0));
        assert!(used.is_used(9));
        assert!(!used.is_used(5));

        used.release(0);
        assert!(!used.is_used(0));
        assert!(used.is_used(9));
    }

    #[test]
    fn test_empty_assignment() {
        let a = Assignment::new(0);
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
    }
}
