//! Solution counting, capped at two.

use symdoku_core::Grid;

use crate::{Deadline, SearchTimeout};

/// Number of completions of a grid, counted no further than two.
///
/// Every caller branches on exactly these buckets: the generator keeps
/// filling on `Many`, stops on `One`, and rejects a placement on `Zero`;
/// the eliminator keeps a removal only while the count stays `One`. An
/// exact count above two is never needed, so the search short-circuits the
/// moment a second completion turns up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionCount {
    /// No assignment completes the grid.
    Zero,
    /// Exactly one completion exists.
    One,
    /// At least two completions exist.
    Many,
}

impl SolutionCount {
    /// Returns `true` for [`SolutionCount::One`].
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::One)
    }

    /// Saturating bucket addition; anything past one is `Many`.
    const fn add(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, count) | (count, Self::Zero) => count,
            _ => Self::Many,
        }
    }
}

/// Counts the completions of `grid`, capped at two.
///
/// Total for well-formed grids: it never fails, and it restores `grid` to
/// its input state before returning. Feeding it a grid that already
/// violates the row/column/box invariant is a contract violation; the
/// count it returns for such input is meaningless.
///
/// # Examples
///
/// ```
/// use symdoku_core::Grid;
/// use symdoku_solver::{SolutionCount, count_solutions};
///
/// let mut empty = Grid::new();
/// assert_eq!(count_solutions(&mut empty), SolutionCount::Many);
/// assert_eq!(empty, Grid::new()); // restored
/// ```
pub fn count_solutions(grid: &mut Grid) -> SolutionCount {
    let mut deadline = Deadline::unbounded();
    match count_solutions_bounded(grid, &mut deadline) {
        Ok(count) => count,
        Err(SearchTimeout) => unreachable!("unbounded deadline cannot expire"),
    }
}

/// Counts the completions of `grid`, capped at two, under a deadline.
///
/// The generator runs under this variant: `deadline` is sampled inside the
/// recursion, and an expiry unwinds the entire search. Trial placements
/// are undone on the way out, so `grid` is restored whether the search
/// finishes or times out.
///
/// # Errors
///
/// Returns [`SearchTimeout`] if `deadline` expires mid-search.
pub fn count_solutions_bounded(
    grid: &mut Grid,
    deadline: &mut Deadline,
) -> Result<SolutionCount, SearchTimeout> {
    count_from(grid, 0, deadline)
}

fn count_from(
    grid: &mut Grid,
    frontier: usize,
    deadline: &mut Deadline,
) -> Result<SolutionCount, SearchTimeout> {
    deadline.check()?;

    // Cells below the frontier are filled at this depth, so the scan can
    // resume where the parent left off.
    let Some(pos) = grid.first_empty_from(frontier) else {
        return Ok(SolutionCount::One);
    };

    let mut total = SolutionCount::Zero;
    for digit in grid.candidates(pos) {
        grid.set(pos, Some(digit));
        let branch = count_from(grid, pos.index() + 1, deadline);
        grid.set(pos, None);
        total = total.add(branch?);
        if let SolutionCount::Many = total {
            break;
        }
    }
    Ok(total)
}
