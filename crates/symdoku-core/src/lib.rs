//! Core board types for the Symdoku engine.
//!
//! This crate holds the pure data layer shared by the solver and generator:
//! the board itself, typed digits, candidate sets, positions with the
//! central-symmetry mirror relation, and house (row/column/box) geometry.
//! It performs no search and no I/O.
//!
//! # Overview
//!
//! - [`digit`]: [`Digit`], the type-safe 1-9 cell value
//! - [`digit_set`]: [`DigitSet`], a 9-bit set of digits
//! - [`position`]: [`Position`], board coordinates, scan order, and the
//!   mirror relation driving symmetric generation
//! - [`house`]: [`House`], the 27 constraint groups
//! - [`grid`]: [`Grid`], the 9×9 board with candidate evaluation,
//!   consistency checks, and an 81-character text form
//!
//! # Examples
//!
//! ```
//! use symdoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 4), Some(Digit::D5));
//!
//! // 5 is no longer a candidate anywhere in row 4.
//! let candidates = grid.candidates(Position::new(8, 4));
//! assert!(!candidates.contains(Digit::D5));
//! assert_eq!(candidates.len(), 8);
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
};
