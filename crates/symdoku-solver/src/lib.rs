//! Backtracking search over sudoku grids.
//!
//! The search primitives here are what puzzle generation is built on:
//!
//! - [`count_solutions`] classifies a grid as having zero, exactly one, or
//!   more than one solution, abandoning the search as soon as a second
//!   solution is found.
//! - [`solve`] produces a solution together with the number of digit
//!   placements the search tried, which serves as a difficulty score.
//! - [`Deadline`] bounds a search by wall-clock time so a caller can give
//!   up on a hopeless grid instead of waiting out a full enumeration.
//!
//! # Example
//!
//! ```
//! use symdoku_core::Grid;
//! use symdoku_solver::{SolutionCount, count_solutions, solve};
//!
//! let mut grid: Grid = "
//!     53. .7. ...
//!     6.. 195 ...
//!     .98 ... .6.
//!     8.. .6. ..3
//!     4.. 8.3 ..1
//!     7.. .2. ..6
//!     .6. ... 28.
//!     ... 419 ..5
//!     ... .8. .79
//! "
//! .parse()?;
//!
//! assert_eq!(count_solutions(&mut grid), SolutionCount::One);
//!
//! let solution = solve(&grid).ok_or("unsolvable")?;
//! assert!(solution.grid.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backtrack;
pub mod count;
pub mod deadline;

pub use self::{
    backtrack::{Solution, solve},
    count::{SolutionCount, count_solutions, count_solutions_bounded},
    deadline::{Deadline, SearchTimeout},
};
