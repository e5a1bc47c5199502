//! Single-solution search and the difficulty score derived from it.

use symdoku_core::Grid;

/// Outcome of a successful [`solve`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// The completed grid.
    pub grid: Grid,
    /// Total digit placements the search tried, including placements that
    /// were later backtracked.
    pub steps: usize,
    /// Placements beyond the minimum needed to fill the grid.
    ///
    /// A puzzle solved without a single wrong guess scores zero; every
    /// backtracked placement adds one, so harder puzzles score higher.
    pub score: usize,
}

/// Finds the first solution of `puzzle` in scan order.
///
/// Returns `None` if the puzzle admits no solution. Cells are visited
/// row by row, `x` fastest, and candidates are tried in ascending order,
/// so the result is deterministic for a given grid.
#[must_use]
pub fn solve(puzzle: &Grid) -> Option<Solution> {
    let mut grid = puzzle.clone();
    let mut steps = 0;
    solve_from(&mut grid, 0, &mut steps).then(|| Solution {
        score: steps - puzzle.empty_count(),
        grid,
        steps,
    })
}

fn solve_from(grid: &mut Grid, frontier: usize, steps: &mut usize) -> bool {
    let Some(pos) = grid.first_empty_from(frontier) else {
        return true;
    };
    for digit in grid.candidates(pos) {
        *steps += 1;
        grid.set(pos, Some(digit));
        if solve_from(grid, pos.index() + 1, steps) {
            return true;
        }
        grid.set(pos, None);
    }
    false
}
