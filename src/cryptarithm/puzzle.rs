use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;
use std::str::FromStr;

/// A 1:1 mapping into the digits 0-9 is impossible beyond this many letters.
pub const MAX_DISTINCT_LETTERS: usize = 10;

/// An additive cryptarithmetic puzzle: `addend1 + addend2 = sum`.
///
/// Words are normalized to uppercase on construction. The puzzle is an
/// immutable input to a solve call; callers are expected to supply letter-only
/// words (non-letter characters are rejected by the equation parser but not by
/// [`Puzzle::new`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    addend1: String,
    addend2: String,
    sum: String,
}

impl Puzzle {
    /// Creates a puzzle from three words, uppercasing each.
    #[must_use]
    pub fn new(addend1: &str, addend2: &str, sum: &str) -> Self {
        Self {
            addend1: addend1.to_uppercase(),
            addend2: addend2.to_uppercase(),
            sum: sum.to_uppercase(),
        }
    }

    /// The first addend, uppercased.
    #[must_use]
    pub fn addend1(&self) -> &str {
        &self.addend1
    }

    /// The second addend, uppercased.
    #[must_use]
    pub fn addend2(&self) -> &str {
        &self.addend2
    }

    /// The sum word, uppercased.
    #[must_use]
    pub fn sum(&self) -> &str {
        &self.sum
    }

    /// The distinct letters of the puzzle in first-appearance order over
    /// `addend1 ++ addend2 ++ sum`.
    ///
    /// The order fixes the search order of the solver, making results
    /// deterministic; it does not affect which assignments are valid.
    #[must_use]
    pub fn letters(&self) -> SmallVec<[char; MAX_DISTINCT_LETTERS]> {
        self.addend1
            .chars()
            .chain(self.addend2.chars())
            .chain(self.sum.chars())
            .unique()
            .collect()
    }

    /// Length of the longer addend.
    #[must_use]
    pub fn max_addend_len(&self) -> usize {
        self.addend1.chars().count().max(self.addend2.chars().count())
    }

    /// Structural feasibility: all three words non-empty, at most ten distinct
    /// letters, and the sum exactly as long as the longer addend or one digit
    /// longer (a carry can add at most one digit).
    ///
    /// Infeasible puzzles can never have a solution, so the solver rejects
    /// them before searching.
    #[must_use]
    pub fn is_structurally_feasible(&self) -> bool {
        if self.addend1.is_empty() || self.addend2.is_empty() || self.sum.is_empty() {
            return false;
        }

        if self.letters().len() > MAX_DISTINCT_LETTERS {
            return false;
        }

        let max_len = self.max_addend_len();
        let sum_len = self.sum.chars().count();
        sum_len == max_len || sum_len == max_len + 1
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.addend1, self.addend2, self.sum)
    }
}

/// Errors from parsing an equation string such as `SEND+MORE=MONEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleParseError {
    /// No `=` (or `==`) between the addends and the sum.
    MissingSeparator,
    /// The left-hand side did not contain exactly two `+`-separated words.
    WrongAddendCount,
    /// One of the three words was empty.
    EmptyWord,
    /// A word contained a character outside A-Z / a-z.
    InvalidCharacter(char),
}

impl Display for PuzzleParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "expected '=' between addends and sum"),
            Self::WrongAddendCount => write!(f, "expected exactly two '+'-separated addends"),
            Self::EmptyWord => write!(f, "words must be non-empty"),
            Self::InvalidCharacter(c) => write!(f, "invalid character {c:?} in word"),
        }
    }
}

impl std::error::Error for PuzzleParseError {}

fn check_word(word: &str) -> Result<&str, PuzzleParseError> {
    if word.is_empty() {
        return Err(PuzzleParseError::EmptyWord);
    }
    if let Some(c) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        return Err(PuzzleParseError::InvalidCharacter(c));
    }
    Ok(word)
}

impl FromStr for Puzzle {
    type Err = PuzzleParseError;

    /// Parses `ADDEND1 + ADDEND2 = SUM`. Both `=` and `==` separate the sides;
    /// surrounding whitespace is ignored; case is normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, rhs) = s
            .split_once('=')
            .ok_or(PuzzleParseError::MissingSeparator)?;
        let sum = rhs.trim_start_matches('=').trim();

        let addends: Vec<&str> = lhs.split('+').map(str::trim).collect();
        let [addend1, addend2] = addends.as_slice() else {
            return Err(PuzzleParseError::WrongAddendCount);
        };

        Ok(Self::new(
            check_word(addend1)?,
            check_word(addend2)?,
            check_word(sum)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases() {
        let p = Puzzle::new("send", "More", "moneY");
        assert_eq!(p.addend1(), "SEND");
        assert_eq!(p.addend2(), "MORE");
        assert_eq!(p.sum(), "MONEY");
    }

    #[test]
    fn test_letters_first_appearance_order() {
        let p = Puzzle::new("SEND", "MORE", "MONEY");
        let letters: Vec<char> = p.letters().into_iter().collect();
        assert_eq!(letters, vec!['S', 'E', 'N', 'D', 'M', 'O', 'R', 'Y']);
    }

    #[test]
    fn test_parse_plain_equation() {
        let p: Puzzle = "SEND+MORE=MONEY".parse().unwrap();
        assert_eq!(p, Puzzle::new("SEND", "MORE", "MONEY"));
    }

    #[test]
    fn test_parse_spaced_double_equals() {
        let p: Puzzle = "so + so == too".parse().unwrap();
        assert_eq!(p, Puzzle::new("SO", "SO", "TOO"));
    }

    #[test]
    fn test_parse_missing_separator() {
        assert_eq!(
            "SEND+MORE".parse::<Puzzle>(),
            Err(PuzzleParseError::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_wrong_addend_count() {
        assert_eq!(
            "A+B+C=D".parse::<Puzzle>(),
            Err(PuzzleParseError::WrongAddendCount)
        );
        assert_eq!(
            "AB=CD".parse::<Puzzle>(),
            Err(PuzzleParseError::WrongAddendCount)
        );
    }

    #[test]
    fn test_parse_empty_word() {
        assert_eq!(
            "SEND+=MONEY".parse::<Puzzle>(),
            Err(PuzzleParseError::EmptyWord)
        );
    }

    #[test]
    fn test_parse_invalid_character() {
        assert_eq!(
            "S3ND+MORE=MONEY".parse::<Puzzle>(),
            Err(PuzzleParseError::InvalidCharacter('3'))
        );
    }

    #[test]
    fn test_feasibility_letter_count() {
        assert!(!Puzzle::new("ABCDEFGHIJ", "K", "L").is_structurally_feasible());
        assert!(Puzzle::new("SEND", "MORE", "MONEY").is_structurally_feasible());
    }

    #[test]
    fn test_feasibility_sum_length_window() {
        // sum may equal the longer addend's length or exceed it by one
        assert!(Puzzle::new("SO", "SO", "TOO").is_structurally_feasible());
        assert!(Puzzle::new("AB", "CD", "EF").is_structurally_feasible());
        assert!(!Puzzle::new("AB", "C", "DEFG").is_structurally_feasible());
        assert!(!Puzzle::new("ABC", "DEF", "GH").is_structurally_feasible());
    }

    #[test]
    fn test_feasibility_empty_words() {
        assert!(!Puzzle::new("", "", "").is_structurally_feasible());
        assert!(!Puzzle::new("A", "", "A").is_structurally_feasible());
    }

    #[test]
    fn test_display() {
        let p = Puzzle::new("SEND", "MORE", "MONEY");
        assert_eq!(p.to_string(), "SEND + MORE = MONEY");
    }
}
