//! Symmetric Sudoku puzzle generation.
//!
//! Puzzles are built in two phases over one exclusively owned grid. A
//! randomized fill places digits in mirror pairs, point-reflected through
//! the grid center, until the solution counter reports the grid uniquely
//! determined; elimination then strips mirror pairs back out as long as
//! uniqueness survives, until exactly the requested number of givens
//! remains. A wall-clock budget bounds each fill attempt, and the driver
//! restarts from scratch on a timeout or when elimination cannot land
//! exactly on the goal.
//!
//! Every run is pinned by a [`PuzzleSeed`], so puzzles can be reproduced,
//! shared, and regression-tested by seed alone.
//!
//! # Example
//!
//! ```
//! use symdoku_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate_with_seed(
//!     Difficulty::Easy.givens(),
//!     PuzzleSeed::from_phrase("docs"),
//! )?;
//!
//! assert_eq!(puzzle.problem.filled_count(), 32);
//! assert!(puzzle.solution.is_solved());
//! # Ok::<(), symdoku_generator::GenerateError>(())
//! ```

pub mod difficulty;
pub mod eliminate;
pub mod generate;
pub mod seed;

pub use self::{
    difficulty::Difficulty,
    eliminate::eliminate,
    generate::{GenerateError, GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
