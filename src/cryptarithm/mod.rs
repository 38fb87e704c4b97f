#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Core cryptarithmetic machinery: puzzle representation, assignment state,
//! and the backtracking solver.

/// Slot-indexed letter-to-digit assignment state and the digit-usage mask.
pub mod assignment;

/// The `Puzzle` value type: normalization, equation parsing, letter
/// enumeration, and structural feasibility checks.
pub mod puzzle;

/// The exhaustive backtracking solver and its search statistics.
pub mod solver;
