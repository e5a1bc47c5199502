//! Example demonstrating symmetric Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` and pick a givens goal
//! - Generate a random or seed-pinned puzzle
//! - Display the puzzle, solution, seed, and score
//! - Sample many puzzles in parallel and keep the hardest one
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pin the puzzle to a seed or a phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "first snow"
//! ```
//!
//! Pick a preset or an explicit givens goal:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! cargo run --example generate_puzzle -- --givens 30
//! ```
//!
//! Sample puzzles in parallel and keep the highest-scoring one:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --max-tries 200
//! ```
//!
//! Attempt-level logging goes through `RUST_LOG`:
//!
//! ```sh
//! RUST_LOG=symdoku_generator=debug cargo run --example generate_puzzle
//! ```

use std::{process, time::Duration};

use clap::{Parser, ValueEnum};
use rayon::prelude::*;
use symdoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Easy,
    Medium,
    Hard,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Easy => Self::Easy,
            Preset::Medium => Self::Medium,
            Preset::Hard => Self::Hard,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty preset selecting the givens goal.
    #[arg(long, value_name = "PRESET", default_value = "easy")]
    difficulty: Preset,

    /// Explicit givens goal overriding the preset.
    #[arg(long, value_name = "COUNT")]
    givens: Option<usize>,

    /// Seed as 64 hex characters; random if omitted.
    #[arg(long, value_name = "SEED", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Derive the seed from a phrase instead of hex.
    #[arg(long, value_name = "PHRASE")]
    phrase: Option<String>,

    /// Wall-clock budget per fill attempt, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    budget_ms: u64,

    /// Sample this many puzzles in parallel and keep the highest-scoring one.
    #[arg(long, value_name = "COUNT", conflicts_with_all = ["seed", "phrase"])]
    max_tries: Option<usize>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let goal = args
        .givens
        .unwrap_or_else(|| Difficulty::from(args.difficulty).givens());
    if !(17..=81).contains(&goal) {
        eprintln!("--givens must be between 17 and 81.");
        process::exit(2);
    }

    let generator = PuzzleGenerator::new().with_budget(Duration::from_millis(args.budget_ms));

    if let Some(max_tries) = args.max_tries {
        if max_tries == 0 {
            eprintln!("--max-tries must be at least 1.");
            process::exit(1);
        }
        let best = (0..max_tries)
            .into_par_iter()
            .filter_map(|_| generator.generate(goal).ok())
            .max_by_key(|puzzle| puzzle.score);
        match best {
            Some(puzzle) => print_puzzle(&puzzle, Some(max_tries)),
            None => {
                eprintln!("No puzzle could be generated within the budget.");
                process::exit(1);
            }
        }
        return;
    }

    let seed = match &args.phrase {
        Some(phrase) => Some(PuzzleSeed::from_phrase(phrase)),
        None => args.seed,
    };
    let result = match seed {
        Some(seed) => generator.generate_with_seed(goal, seed),
        None => generator.generate(goal),
    };
    match result {
        Ok(puzzle) => print_puzzle(&puzzle, None),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle, sampled: Option<usize>) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();

    if let Some(max_tries) = sampled {
        println!("Selection:");
        println!("  Sampled: {max_tries}");
        println!();
    }

    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Score: {}", puzzle.score);
    println!("Attempts: {}", puzzle.attempts);
}
