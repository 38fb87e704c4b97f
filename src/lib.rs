#![deny(missing_docs)]
//! This crate solves cryptarithmetic puzzles (also called alphametics): two words
//! added to produce a third, where every letter stands for a unique base-10 digit.

/// The `cryptarithm` module implements the core constraint-satisfaction solver:
/// puzzle representation, digit-assignment bookkeeping, and the exhaustive
/// backtracking search.
pub mod cryptarithm;

/// The `explain` module renders solved puzzles as text and defines the interface
/// for downstream explanation producers.
pub mod explain;

/// The `generate` module defines difficulty tiers and the puzzle-generator
/// interface, backed by a built-in word bank of known-solvable puzzles.
pub mod generate;
