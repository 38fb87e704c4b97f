#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Text output for solved puzzles, and the interface for richer downstream
//! explanation producers (for example, a generative text service). Explanation
//! is invoked only once a solution exists.

use crate::cryptarithm::puzzle::Puzzle;
use crate::cryptarithm::solver::SolutionMapping;
use std::fmt::Write as _;

/// Produces a human-readable derivation of a solved puzzle.
pub trait Explainer {
    /// Formats an explanation for `puzzle` under the discovered `mapping`.
    fn explain(&self, puzzle: &Puzzle, mapping: &SolutionMapping) -> String;
}

impl<F> Explainer for F
where
    F: Fn(&Puzzle, &SolutionMapping) -> String,
{
    fn explain(&self, puzzle: &Puzzle, mapping: &SolutionMapping) -> String {
        self(puzzle, mapping)
    }
}

/// Substitutes each letter of `word` with its mapped digit, `?` for letters
/// the mapping does not cover.
#[must_use]
pub fn substitute(word: &str, mapping: &SolutionMapping) -> String {
    word.chars()
        .map(|c| {
            mapping
                .get(&c)
                .map_or('?', |&d| char::from(b'0' + d))
        })
        .collect()
}

/// The puzzle's equation with digits substituted, e.g. `9567 + 1085 = 10652`.
#[must_use]
pub fn substituted_equation(puzzle: &Puzzle, mapping: &SolutionMapping) -> String {
    format!(
        "{} + {} = {}",
        substitute(puzzle.addend1(), mapping),
        substitute(puzzle.addend2(), mapping),
        substitute(puzzle.sum(), mapping)
    )
}

/// Renders the solved puzzle as a column-aligned grid: the letter column on
/// the left, the substituted digit column on the right, with the usual `+`
/// gutter and a rule above the sum.
#[must_use]
pub fn render_solution(puzzle: &Puzzle, mapping: &SolutionMapping) -> String {
    let width = puzzle
        .addend1()
        .chars()
        .count()
        .max(puzzle.addend2().chars().count())
        .max(puzzle.sum().chars().count());

    let row = |prefix: char, word: &str| {
        let digits = substitute(word, mapping);
        format!("{prefix} {word:>width$}    {prefix} {digits:>width$}")
    };
    let rule = "-".repeat(width + 2);

    let mut out = String::new();
    let _ = writeln!(out, "{}", row(' ', puzzle.addend1()));
    let _ = writeln!(out, "{}", row('+', puzzle.addend2()));
    let _ = writeln!(out, "{rule}    {rule}");
    let _ = writeln!(out, "{}", row(' ', puzzle.sum()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cryptarithm::solver::solve;

    #[test]
    fn test_substitute() {
        let mapping = solve("SEND", "MORE", "MONEY").unwrap();
        assert_eq!(substitute("SEND", &mapping), "9567");
        assert_eq!(substitute("MONEY", &mapping), "10652");
        assert_eq!(substitute("SX", &mapping), "9?");
    }

    #[test]
    fn test_substituted_equation() {
        let puzzle = Puzzle::new("SEND", "MORE", "MONEY");
        let mapping = solve("SEND", "MORE", "MONEY").unwrap();
        assert_eq!(
            substituted_equation(&puzzle, &mapping),
            "9567 + 1085 = 10652"
        );
    }

    #[test]
    fn test_render_solution_alignment() {
        let puzzle = Puzzle::new("SEND", "MORE", "MONEY");
        let mapping = solve("SEND", "MORE", "MONEY").unwrap();
        let rendered = render_solution(&puzzle, &mapping);

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        // every row is padded to the same width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(lines[0].contains("SEND") && lines[0].contains("9567"));
        assert!(lines[1].starts_with('+') && lines[1].contains("1085"));
        assert!(lines[2].chars().all(|c| c == '-' || c == ' '));
        assert!(lines[3].contains("MONEY") && lines[3].contains("10652"));
    }

    #[test]
    fn test_closure_explainer() {
        let puzzle = Puzzle::new("SO", "SO", "TOO");
        let mapping = solve("SO", "SO", "TOO").unwrap();
        let explainer = |p: &Puzzle, m: &SolutionMapping| {
            format!("{p} solves as {}", substituted_equation(p, m))
        };
        let text = explainer.explain(&puzzle, &mapping);
        assert!(text.starts_with("SO + SO = TOO solves as "));
    }
}
