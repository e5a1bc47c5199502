//! Symmetric givens removal that preserves uniqueness.

use rand::{Rng, seq::SliceRandom as _};
use symdoku_core::{Grid, Position};
use symdoku_solver::count_solutions;

/// Strips mirror pairs from `grid` until `goal` givens remain.
///
/// `pool` holds the positions assigned during generation; only those are
/// considered for removal. The pool is shuffled first, then each position
/// is cleared together with its mirror, and the removal is kept only if
/// the grid still has exactly one solution; otherwise both values are put
/// back. Stops once the filled count reaches `goal` or the pool runs out,
/// and never clears a pair that would drop the count below `goal`.
pub fn eliminate(grid: &mut Grid, pool: &mut [Position], goal: usize, rng: &mut impl Rng) {
    pool.shuffle(rng);
    for &pos in &*pool {
        if grid.filled_count() <= goal {
            break;
        }
        let mirror = pos.mirror();
        let pair_len = if mirror == pos { 1 } else { 2 };
        if grid.filled_count() < goal + pair_len {
            continue;
        }

        let saved_pos = grid[pos];
        let saved_mirror = grid[mirror];
        grid.set(pos, None);
        grid.set(mirror, None);
        if !count_solutions(grid).is_unique() {
            grid.set(pos, saved_pos);
            grid.set(mirror, saved_mirror);
        }
    }
}

#[cfg(test)]
const SOLVED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";
