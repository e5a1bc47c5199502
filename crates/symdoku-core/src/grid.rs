//! The 9×9 board.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 Sudoku board; each cell holds `Option<Digit>`.
///
/// The grid is plain data plus invariant checks. It has no opinion about
/// givens versus user entries: a puzzle's givens are simply the non-empty
/// cells of the grid the generation pipeline hands back.
///
/// Exactly one algorithm phase mutates a grid at a time; the solver and
/// generator thread a single `&mut Grid` through their recursion and undo
/// trial placements on the way out rather than cloning per call.
///
/// # Text form
///
/// `Display` renders 81 characters in scan order with `.` for empty cells.
/// `FromStr` accepts digits, `.`/`_`/`0` for empty, and skips ASCII
/// whitespace, so fixtures can be written one row per line:
///
/// ```
/// use symdoku_core::{Digit, Grid, Position};
///
/// let grid: Grid = "
///     53..7....
///     6..195...
///     .98....6.
///     8...6...3
///     4..8.3..1
///     7...2...6
///     .6....28.
///     ...419..5
///     ....8..79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(grid.filled_count(), 30);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the value at `pos`, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub fn set(&mut self, pos: Position, value: Option<Digit>) {
        self.cells[pos.index()] = value;
    }

    /// Returns the digits that can legally be placed at `pos`.
    ///
    /// A digit is a candidate iff it does not appear elsewhere in `pos`'s
    /// row, column, or 3×3 box. The cell at `pos` itself is excluded from
    /// the scan, so a value already placed there does not rule itself out.
    ///
    /// This is the single authority on placement legality; the solution
    /// counter, solver, generator, and eliminator all route through it.
    /// Pure: same grid, same answer, no side effects.
    ///
    /// # Examples
    ///
    /// ```
    /// use symdoku_core::{Digit, Grid, Position};
    ///
    /// let grid: Grid = format!("53..7....{}", ".".repeat(72)).parse().unwrap();
    /// let candidates = grid.candidates(Position::new(2, 0));
    ///
    /// assert!(!candidates.contains(Digit::D5));
    /// assert!(!candidates.contains(Digit::D3));
    /// assert!(!candidates.contains(Digit::D7));
    /// assert!(candidates.contains(Digit::D1));
    /// ```
    #[must_use]
    pub fn candidates(&self, pos: Position) -> DigitSet {
        let mut seen = DigitSet::new();
        let x = pos.x();
        let y = pos.y();
        for i in 0..9 {
            let row_cell = Position::new(i, y);
            if row_cell != pos
                && let Some(digit) = self.get(row_cell)
            {
                seen.insert(digit);
            }
            let column_cell = Position::new(x, i);
            if column_cell != pos
                && let Some(digit) = self.get(column_cell)
            {
                seen.insert(digit);
            }
        }
        let box_x = x / 3 * 3;
        let box_y = y / 3 * 3;
        for dy in 0..3 {
            for dx in 0..3 {
                let box_cell = Position::new(box_x + dx, box_y + dy);
                if box_cell != pos
                    && let Some(digit) = self.get(box_cell)
                {
                    seen.insert(digit);
                }
            }
        }
        DigitSet::FULL.difference(seen)
    }

    /// Returns the first empty cell in scan order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        self.first_empty_from(0)
    }

    /// Returns the first empty cell with linear index `start` or higher.
    ///
    /// The backtracking search uses this as a frontier: cells before the
    /// current recursion depth are known filled, so the scan need not
    /// restart from zero at every level.
    #[must_use]
    pub fn first_empty_from(&self, start: usize) -> Option<Position> {
        let start = start.min(self.cells.len());
        self.cells[start..]
            .iter()
            .position(Option::is_none)
            .map(|offset| Position::from_index(start + offset))
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.len() - self.filled_count()
    }

    /// Returns `true` if no house contains a duplicate digit.
    ///
    /// Empty cells are fine; this checks the placement invariant, not
    /// completeness.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        House::ALL.iter().all(|house| {
            let mut seen = DigitSet::new();
            house.positions().all(|pos| match self.get(pos) {
                Some(digit) => {
                    let fresh = !seen.contains(digit);
                    seen.insert(digit);
                    fresh
                }
                None => true,
            })
        })
    }

    /// Returns `true` if every cell is filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if the grid is completely and consistently filled.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_complete() && self.is_consistent()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(\"{self}\")")
    }
}

/// Error parsing a [`Grid`] from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character other than a digit, `.`, `_`, `0`, or whitespace.
    #[display("unexpected character {character:?} in grid text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text did not contain exactly 81 cells.
    #[display("expected 81 cells, found {cells}")]
    WrongCellCount {
        /// Number of cell characters found.
        cells: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut cells = 0;
        for character in s.chars() {
            if character.is_ascii_whitespace() {
                continue;
            }
            let cell = match character {
                '.' | '_' | '0' => None,
                '1'..='9' => character
                    .to_digit(10)
                    .and_then(|value| u8::try_from(value).ok())
                    .and_then(Digit::new),
                _ => return Err(ParseGridError::UnexpectedCharacter { character }),
            };
            if cells < 81 {
                grid.cells[cells] = cell;
            }
            cells += 1;
        }
        if cells != 81 {
            return Err(ParseGridError::WrongCellCount { cells });
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    fn solved_grid() -> Grid {
        SOLVED.parse().expect("valid solved grid")
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.filled_count(), 0);
        assert_eq!(grid.empty_count(), 81);
        assert!(grid.is_consistent());
        assert!(!grid.is_complete());
        for pos in Position::ALL {
            assert_eq!(grid.get(pos), None);
        }
    }

    #[test]
    fn test_set_get_and_index() {
        let mut grid = Grid::new();
        let pos = Position::new(3, 7);
        grid.set(pos, Some(Digit::D6));
        assert_eq!(grid.get(pos), Some(Digit::D6));
        assert_eq!(grid[pos], Some(Digit::D6));

        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_candidates_row_scenario() {
        let grid: Grid = format!("53..7....{}", ".".repeat(72))
            .parse()
            .expect("valid grid");
        let candidates = grid.candidates(Position::new(2, 0));

        for digit in [Digit::D5, Digit::D3, Digit::D7] {
            assert!(!candidates.contains(digit));
        }
        for digit in [Digit::D1, Digit::D2, Digit::D4, Digit::D6, Digit::D8, Digit::D9] {
            assert!(candidates.contains(digit));
        }

        // Pure function: repeated calls agree.
        assert_eq!(grid.candidates(Position::new(2, 0)), candidates);
    }

    #[test]
    fn test_candidates_ignore_own_cell() {
        let mut grid: Grid = format!("53..7....{}", ".".repeat(72))
            .parse()
            .expect("valid grid");
        grid.set(Position::new(2, 0), Some(Digit::D4));

        // The value at the queried cell does not exclude itself.
        let candidates = grid.candidates(Position::new(2, 0));
        assert!(candidates.contains(Digit::D4));
        assert!(!candidates.contains(Digit::D5));
    }

    #[test]
    fn test_candidates_cover_all_houses() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 4), Some(Digit::D1)); // same row as (4, 4)
        grid.set(Position::new(4, 0), Some(Digit::D2)); // same column
        grid.set(Position::new(3, 3), Some(Digit::D3)); // same box

        let candidates = grid.candidates(Position::new(4, 4));
        assert!(!candidates.contains(Digit::D1));
        assert!(!candidates.contains(Digit::D2));
        assert!(!candidates.contains(Digit::D3));
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_candidates_on_solved_grid() {
        let mut grid = solved_grid();
        let pos = Position::new(6, 2);
        let removed = grid.get(pos).expect("cell is filled");
        grid.set(pos, None);

        // The only candidate for a cleared cell of a solved grid is the
        // digit that was there.
        let candidates = grid.candidates(pos);
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(removed));
    }

    #[test]
    fn test_first_empty_scan_order() {
        let mut grid = Grid::new();
        assert_eq!(grid.first_empty(), Some(Position::new(0, 0)));

        for pos in &Position::ALL[..11] {
            grid.set(*pos, Some(Digit::D1));
        }
        assert_eq!(grid.first_empty(), Some(Position::new(2, 1)));
        assert_eq!(grid.first_empty_from(11), Some(Position::new(2, 1)));
        assert_eq!(grid.first_empty_from(80), Some(Position::new(8, 8)));

        assert_eq!(solved_grid().first_empty(), None);
    }

    #[test]
    fn test_consistency_checks() {
        let solved = solved_grid();
        assert!(solved.is_consistent());
        assert!(solved.is_complete());
        assert!(solved.is_solved());

        let mut row_dup = solved.clone();
        row_dup.set(Position::new(0, 0), Some(Digit::D4)); // 4 already at (2, 0)
        assert!(!row_dup.is_consistent());
        assert!(!row_dup.is_solved());

        let mut box_dup = Grid::new();
        box_dup.set(Position::new(0, 0), Some(Digit::D9));
        box_dup.set(Position::new(2, 2), Some(Digit::D9));
        assert!(!box_dup.is_consistent());

        let mut column_dup = Grid::new();
        column_dup.set(Position::new(5, 1), Some(Digit::D2));
        column_dup.set(Position::new(5, 8), Some(Digit::D2));
        assert!(!column_dup.is_consistent());
    }

    #[test]
    fn test_display_round_trip() {
        let grid = solved_grid();
        assert_eq!(grid.to_string(), SOLVED);
        assert_eq!(grid.to_string().parse::<Grid>(), Ok(grid));

        // All empty markers normalize to '.'.
        let sparse: Grid = format!("1_0.2{}", ".".repeat(76)).parse().expect("valid grid");
        assert_eq!(&sparse.to_string()[..5], "1...2");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "x".repeat(81).parse::<Grid>(),
            Err(ParseGridError::UnexpectedCharacter { character: 'x' })
        );
        assert_eq!(
            ".".repeat(80).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { cells: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Grid>(),
            Err(ParseGridError::WrongCellCount { cells: 82 })
        );
    }
}

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    // Arbitrary cell writes; later writes win, validity not required.
    fn sparse_cells() -> impl Strategy<Value = Vec<(usize, u8)>> {
        proptest::collection::vec((0..81_usize, 1..=9_u8), 0..40)
    }

    fn grid_from(cells: &[(usize, u8)]) -> Grid {
        let mut grid = Grid::new();
        for &(index, value) in cells {
            grid.set(Position::from_index(index), Digit::new(value));
        }
        grid
    }

    proptest! {
        #[test]
        fn test_candidates_match_conflict_scan(cells in sparse_cells(), index in 0..81_usize) {
            let grid = grid_from(&cells);
            let pos = Position::from_index(index);
            let candidates = grid.candidates(pos);

            for digit in Digit::ALL {
                let conflicts = Position::ALL.iter().any(|&other| {
                    other != pos
                        && grid.get(other) == Some(digit)
                        && (other.x() == pos.x()
                            || other.y() == pos.y()
                            || other.box_index() == pos.box_index())
                });
                prop_assert_eq!(candidates.contains(digit), !conflicts);
            }

            // No intervening mutation, identical answer.
            prop_assert_eq!(grid.candidates(pos), candidates);
        }

        #[test]
        fn test_text_round_trip(cells in sparse_cells()) {
            let grid = grid_from(&cells);
            let reparsed: Grid = grid.to_string().parse().expect("display output reparses");
            prop_assert_eq!(reparsed, grid);
        }
    }
}
