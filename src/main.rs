//! # cryptarithm
//!
//! `cryptarithm` is a command-line solver for cryptarithmetic puzzles: two
//! words added to produce a third, with each letter standing for a unique
//! base-10 digit. It performs an exhaustive backtracking search over digit
//! assignments and reports the first satisfying mapping, or that none exists.
//!
//! ## Usage
//!
//! ```sh
//! cryptarithm [GLOBAL_OPTIONS] [SUBCOMMAND]
//! ```
//!
//! ### Global argument
//!
//! -   `equation`: if provided as the *only* argument (without a subcommand),
//!     it's treated as an equation to solve.
//!
//!     ```sh
//!     cryptarithm "SEND+MORE=MONEY"
//!     ```
//!
//! ### Subcommands
//!
//! 1.  **`words`**: solve a puzzle given as three separate words.
//!     ```sh
//!     cryptarithm words --addend1 SEND --addend2 MORE --sum MONEY [OPTIONS]
//!     ```
//!
//! 2.  **`text`**: solve a puzzle given as equation text (`=` or `==`).
//!     ```sh
//!     cryptarithm text --input "SO + SO == TOO" [OPTIONS]
//!     ```
//!
//! 3.  **`generate`**: draw a candidate puzzle from the built-in word bank for
//!     a difficulty tier and (by default) attempt to solve it.
//!     ```sh
//!     cryptarithm generate --difficulty hard [OPTIONS]
//!     ```
//!
//! ### Common options
//!
//! -   `-d, --debug`: enable debug output (default: `false`).
//! -   `--verify`: re-check the returned mapping against the puzzle
//!     (default: `true`).
//! -   `--stats`: print search statistics after solving (default: `true`).
//! -   `-p, --print-solution`: print the letter-to-digit mapping and the
//!     solved grid (default: `false`).

use clap::{Args, Parser, Subcommand};
use cryptarithm_solver::cryptarithm::puzzle::Puzzle;
use cryptarithm_solver::cryptarithm::solver::{SolveStats, Solver, verify};
use cryptarithm_solver::explain::{render_solution, substituted_equation};
use cryptarithm_solver::generate::{Difficulty, PuzzleGenerator, WordBank};
use itertools::Itertools;
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Defines the command-line interface for the cryptarithm application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "cryptarithm", version, about = "A cryptarithmetic puzzle solver")]
struct Cli {
    /// An optional global equation argument. If provided without a subcommand,
    /// it's treated as an equation such as `SEND+MORE=MONEY` to solve.
    #[arg(global = true)]
    equation: Option<String>,

    /// Specifies the subcommand to execute (e.g. `words`, `text`, `generate`).
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle given as three separate words.
    Words {
        /// The first addend word.
        #[arg(long)]
        addend1: String,

        /// The second addend word.
        #[arg(long)]
        addend2: String,

        /// The sum word.
        #[arg(long)]
        sum: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle given as equation text, e.g. "SEND + MORE == MONEY".
    Text {
        /// The equation to solve.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Draw a candidate puzzle from the built-in word bank.
    Generate {
        /// Difficulty tier: "easy", "medium" or "hard".
        #[arg(long, default_value_t = String::from("medium"))]
        difficulty: String,

        /// Attempt to solve the generated puzzle.
        #[arg(long, default_value_t = true)]
        attempt: bool,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default)]
struct CommonOptions {
    /// Enable debug output, providing more verbose logging during solving.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Enable verification of the found mapping against the puzzle.
    #[arg(long, default_value_t = true)]
    verify: bool,

    /// Enable printing of search statistics after solving.
    #[arg(long, default_value_t = true)]
    stats: bool,

    /// Enable printing of the letter-to-digit mapping and the solved grid.
    #[arg(short, long, default_value_t = false)]
    print_solution: bool,
}

/// Main entry point: parses command-line arguments and dispatches to the
/// appropriate command handler.
fn main() {
    let cli = Cli::parse();

    // Handle the case where an equation is provided globally without a
    // subcommand.
    if let Some(equation) = cli.equation.clone() {
        if cli.command.is_none() {
            let puzzle = parse_equation(&equation);
            solve_and_report(puzzle, &cli.common);
            return;
        }
    }

    match cli.command {
        Some(Commands::Words {
            addend1,
            addend2,
            sum,
            common,
        }) => {
            solve_and_report(Puzzle::new(&addend1, &addend2, &sum), &common);
        }

        Some(Commands::Text { input, common }) => {
            solve_and_report(parse_equation(&input), &common);
        }

        Some(Commands::Generate {
            difficulty,
            attempt,
            common,
        }) => {
            let difficulty: Difficulty = difficulty.parse().unwrap_or_else(|e| {
                eprintln!("{e}");
                std::process::exit(1);
            });

            match WordBank::new().generate(difficulty) {
                Some(puzzle) => {
                    println!("Generated ({difficulty}): {puzzle}");
                    if attempt {
                        solve_and_report(puzzle, &common);
                    }
                }
                None => {
                    eprintln!("No puzzle available for difficulty {difficulty}");
                    std::process::exit(1);
                }
            }
        }

        None => {
            if cli.equation.is_none() {
                eprintln!("No command provided. Use --help for more information.");
                std::process::exit(1);
            }
        }
    }
}

/// Parses equation text into a `Puzzle`, exiting with a message on failure.
fn parse_equation(input: &str) -> Puzzle {
    input.parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse equation {input:?}: {e}");
        std::process::exit(1);
    })
}

/// Solves a puzzle and reports results including stats and verification.
fn solve_and_report(puzzle: Puzzle, common: &CommonOptions) {
    println!("Solving: {puzzle}");

    if common.debug {
        let letters = puzzle.letters();
        println!("Letters ({}): {:?}", letters.len(), letters);
        println!(
            "Structurally feasible: {}",
            puzzle.is_structurally_feasible()
        );
    }

    epoch::advance().unwrap();

    let time = std::time::Instant::now();
    let mut solver = Solver::new(puzzle.clone());
    let sol = solver.solve();
    let elapsed = time.elapsed();

    if common.debug {
        println!("Solution: {sol:?}");
        println!("Time: {elapsed:?}");
    }

    // Advance epoch again so memory stats capture the solving phase.
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.verify {
        if let Some(mapping) = &sol {
            let ok = verify(&puzzle, mapping);
            println!("Verified: {ok:?}");
            assert!(ok, "Solution failed verification!");
        }
    }

    if common.stats {
        print_stats(
            elapsed,
            &puzzle,
            solver.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    match &sol {
        Some(mapping) => {
            println!("Solution: {}", substituted_equation(&puzzle, mapping));

            if common.print_solution {
                for (letter, digit) in mapping.iter().sorted() {
                    println!("  {letter} = {digit}");
                }
                println!("{}", render_solution(&puzzle, mapping));
            }

            println!("\nSOLVED");
        }
        None => println!("\nNO SOLUTION"),
    }
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {:<28} {:>18}  |", label, value);
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {:<20} {:>12} ({:>9.0}/sec)  |", label, value, rate);
}

/// Prints a summary of problem and search statistics.
fn print_stats(elapsed: Duration, puzzle: &Puzzle, s: SolveStats, allocated: f64, resident: f64) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=====================[ Problem Statistics ]========================");
    stat_line("Distinct letters", puzzle.letters().len());
    stat_line("Longest addend", puzzle.max_addend_len());
    stat_line("Sum length", puzzle.sum().chars().count());

    println!("======================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Leaf checks", s.leaf_checks, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("===================================================================");
}
