//! Randomized symmetric fill with timeout-guarded retries.

use std::{num::NonZeroU32, time::Duration};

use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use tinyvec::ArrayVec;

use symdoku_core::{Digit, Grid, Position};
use symdoku_solver::{
    Deadline, SearchTimeout, Solution, SolutionCount, count_solutions_bounded, solve,
};

use crate::{PuzzleSeed, eliminate};

/// Configuration for symmetric puzzle generation.
///
/// The generator holds only configuration, so one instance can serve any
/// number of sequential or externally parallelized calls. Each call owns
/// its grid exclusively for its whole duration.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use symdoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new().with_budget(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    budget: Duration,
    max_attempts: Option<NonZeroU32>,
}

/// A generated puzzle together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The givens layer handed to the player.
    pub problem: Grid,
    /// The unique completion of `problem`.
    pub solution: Grid,
    /// Seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
    /// Fill attempts consumed, counting timed-out and goal-missing ones.
    pub attempts: u32,
    /// Difficulty score of `problem`: backtracked placements beyond the
    /// minimum the solver needed.
    pub score: usize,
}

/// Generation gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// Every allowed attempt timed out or missed the givens goal.
    #[display("puzzle generation gave up after {attempts} attempts")]
    Timeout {
        /// Attempts consumed before giving up.
        attempts: u32,
    },
}

/// What a single fill+eliminate attempt produced.
enum Outcome {
    Success { problem: Grid, solution: Solution },
    GoalMiss { givens: usize },
}

impl PuzzleGenerator {
    /// Wall-clock budget a single fill attempt gets by default.
    pub const DEFAULT_BUDGET: Duration = Duration::from_secs(1);

    /// Creates a generator with the default budget and no attempt ceiling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            budget: Self::DEFAULT_BUDGET,
            max_attempts: None,
        }
    }

    /// Sets the wall-clock budget for a single fill attempt.
    ///
    /// A timed-out attempt is discarded wholesale and generation restarts
    /// from an empty grid with a fresh shuffle; partial fills are never
    /// resumed.
    #[must_use]
    pub const fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Caps the number of attempts before generation gives up.
    ///
    /// Without a ceiling the generator retries until it succeeds, which is
    /// the right behavior for reachable goals; a ceiling turns a goal that
    /// cannot be met into an error instead of an endless loop.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Generates a puzzle with exactly `goal` givens from a random seed.
    ///
    /// The seed used is recorded in the returned [`GeneratedPuzzle`], so
    /// any puzzle can be regenerated later.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Timeout`] once a configured attempt
    /// ceiling is exhausted. Without a ceiling this never fails.
    ///
    /// # Panics
    ///
    /// Panics if `goal` is outside `17..=81`; no uniquely solvable 9×9
    /// puzzle has fewer than 17 givens.
    pub fn generate(&self, goal: usize) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(goal, PuzzleSeed::random())
    }

    /// Generates a puzzle with exactly `goal` givens from `seed`.
    ///
    /// The run is a pure function of `seed` and `goal` as long as no
    /// attempt outruns its budget; timed-out attempts depend on the wall
    /// clock, so a reproducible setup should pair a seed with a budget
    /// comfortably above the expected fill time.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Timeout`] once a configured attempt
    /// ceiling is exhausted. Without a ceiling this never fails.
    ///
    /// # Panics
    ///
    /// Panics if `goal` is outside `17..=81`; no uniquely solvable 9×9
    /// puzzle has fewer than 17 givens.
    pub fn generate_with_seed(
        &self,
        goal: usize,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GenerateError> {
        assert!(
            (17..=81).contains(&goal),
            "givens goal out of range: {goal}"
        );
        let mut rng = seed.rng();
        let mut attempts = 0;
        loop {
            if let Some(max) = self.max_attempts
                && attempts >= max.get()
            {
                log::debug!("goal {goal}: giving up after {attempts} attempts");
                return Err(GenerateError::Timeout { attempts });
            }
            attempts += 1;

            match self.attempt(goal, &mut rng) {
                Ok(Outcome::Success { problem, solution }) => {
                    log::debug!(
                        "goal {goal}: attempt {attempts} succeeded, score {}",
                        solution.score
                    );
                    return Ok(GeneratedPuzzle {
                        problem,
                        solution: solution.grid,
                        seed,
                        attempts,
                        score: solution.score,
                    });
                }
                Ok(Outcome::GoalMiss { givens }) => {
                    log::debug!(
                        "goal {goal}: attempt {attempts} eliminated to {givens} givens, restarting"
                    );
                }
                Err(SearchTimeout) => {
                    log::debug!("goal {goal}: attempt {attempts} ran out of time, restarting");
                }
            }
        }
    }

    /// One full fill+eliminate pass from an empty grid.
    fn attempt(&self, goal: usize, rng: &mut Pcg64) -> Result<Outcome, SearchTimeout> {
        let mut grid = Grid::new();
        let mut unplaced: ArrayVec<[Position; 41]> = Position::CANONICAL.into_iter().collect();
        unplaced.shuffle(rng);
        let mut placed = ArrayVec::<[Position; 41]>::new();
        let mut deadline = Deadline::new(self.budget, rng);

        if !fill_pairs(&mut grid, &mut unplaced, &mut placed, rng, &mut deadline)? {
            unreachable!("an empty grid always admits a symmetric fill");
        }
        log::trace!(
            "fill kept {} givens across {} canonical placements",
            grid.filled_count(),
            placed.len()
        );

        eliminate(&mut grid, &mut placed, goal, rng);

        let givens = grid.filled_count();
        if givens != goal {
            return Ok(Outcome::GoalMiss { givens });
        }
        let Some(solution) = solve(&grid) else {
            unreachable!("an eliminated grid stays uniquely solvable");
        };
        Ok(Outcome::Success {
            problem: grid,
            solution,
        })
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Places mirror pairs until the grid is uniquely determined.
///
/// Pops a canonical position, places a random candidate at it and one at
/// its mirror, and asks the counter how constrained the grid is: `Many`
/// recurses to the next pair, `One` terminates the fill (possibly leaving
/// forced cells empty), `Zero` rejects the value pair. When no value pair
/// works the position goes back on `unplaced` and the failure propagates
/// one level up. Every position whose pair survives is recorded in
/// `placed`.
fn fill_pairs(
    grid: &mut Grid,
    unplaced: &mut ArrayVec<[Position; 41]>,
    placed: &mut ArrayVec<[Position; 41]>,
    rng: &mut Pcg64,
    deadline: &mut Deadline,
) -> Result<bool, SearchTimeout> {
    let Some(pos) = unplaced.pop() else {
        unreachable!("a grid with every mirror pair placed cannot be ambiguous");
    };
    let mirror = pos.mirror();

    let mut values: ArrayVec<[u8; 9]> = grid.candidates(pos).into_iter().map(u8::from).collect();
    values.shuffle(rng);
    for value in values {
        grid.set(pos, Some(Digit::from_value(value)));

        // The mirror's candidates depend on the value just placed, so they
        // are recomputed for every outer value.
        let mut mirror_values: ArrayVec<[u8; 9]> =
            grid.candidates(mirror).into_iter().map(u8::from).collect();
        mirror_values.shuffle(rng);
        for mirror_value in mirror_values {
            grid.set(mirror, Some(Digit::from_value(mirror_value)));
            match count_solutions_bounded(grid, deadline)? {
                SolutionCount::One => {
                    placed.push(pos);
                    return Ok(true);
                }
                SolutionCount::Many => {
                    if fill_pairs(grid, unplaced, placed, rng, deadline)? {
                        placed.push(pos);
                        return Ok(true);
                    }
                }
                SolutionCount::Zero => {}
            }
            grid.set(mirror, None);
        }
        grid.set(pos, None);
    }

    unplaced.push(pos);
    Ok(false)
}

#[cfg(test)]
mod tests {
    use symdoku_solver::count_solutions;

    use super::*;

    fn assert_sound(puzzle: &GeneratedPuzzle, goal: usize) {
        assert_eq!(puzzle.problem.filled_count(), goal);
        assert!(puzzle.problem.is_consistent());
        assert!(count_solutions(&mut puzzle.problem.clone()).is_unique());
        assert!(puzzle.solution.is_solved());
        for pos in Position::ALL {
            assert_eq!(
                puzzle.problem[pos].is_some(),
                puzzle.problem[pos.mirror()].is_some()
            );
            if let Some(digit) = puzzle.problem[pos] {
                assert_eq!(puzzle.solution[pos], Some(digit));
            }
        }

        // Solving the problem from scratch lands on the stored solution
        // and reproduces the reported score.
        let solved = solve(&puzzle.problem).expect("generated puzzles are solvable");
        assert_eq!(solved.grid, puzzle.solution);
        assert_eq!(solved.score, puzzle.score);

        assert!(puzzle.attempts >= 1);
    }

    #[test]
    fn test_exact_givens_symmetric_and_unique() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator
            .generate_with_seed(32, PuzzleSeed::from_phrase("unit test"))
            .expect("no attempt ceiling configured");
        assert_sound(&puzzle, 32);
    }

    #[test]
    fn test_harder_goal_is_reached_exactly() {
        let generator = PuzzleGenerator::new();
        let puzzle = generator
            .generate_with_seed(28, PuzzleSeed::from_phrase("medium"))
            .expect("no attempt ceiling configured");
        assert_sound(&puzzle, 28);
    }

    #[test]
    fn test_same_seed_reproduces_the_puzzle() {
        // A generous budget keeps the clock out of the picture, making the
        // run a pure function of the seed.
        let generator = PuzzleGenerator::new().with_budget(Duration::from_secs(600));
        let seed = PuzzleSeed::from_phrase("reproducible");

        let first = generator
            .generate_with_seed(32, seed)
            .expect("no attempt ceiling configured");
        let second = generator
            .generate_with_seed(32, seed)
            .expect("no attempt ceiling configured");
        assert_eq!(first, second);
    }

    #[test]
    fn test_reported_seed_replays_a_random_run() {
        let generator = PuzzleGenerator::new().with_budget(Duration::from_secs(600));
        let puzzle = generator.generate(32).expect("no attempt ceiling configured");
        let replay = generator
            .generate_with_seed(32, puzzle.seed)
            .expect("no attempt ceiling configured");
        assert_eq!(replay.problem, puzzle.problem);
        assert_eq!(replay.solution, puzzle.solution);
    }

    #[test]
    fn test_different_seeds_give_different_puzzles() {
        let generator = PuzzleGenerator::new();
        let left = generator
            .generate_with_seed(32, PuzzleSeed::from_phrase("left"))
            .expect("no attempt ceiling configured");
        let right = generator
            .generate_with_seed(32, PuzzleSeed::from_phrase("right"))
            .expect("no attempt ceiling configured");
        assert_ne!(left.problem, right.problem);
    }

    #[test]
    fn test_zero_budget_retries_up_to_the_ceiling() {
        let generator = PuzzleGenerator::new()
            .with_budget(Duration::ZERO)
            .with_max_attempts(NonZeroU32::new(2).expect("nonzero"));
        let result = generator.generate_with_seed(32, PuzzleSeed::from_phrase("too slow"));
        assert_eq!(result, Err(GenerateError::Timeout { attempts: 2 }));
    }

    #[test]
    #[should_panic(expected = "givens goal out of range")]
    fn test_goal_below_minimum_panics() {
        let _ = PuzzleGenerator::new().generate(16);
    }

    #[test]
    #[should_panic(expected = "givens goal out of range")]
    fn test_goal_above_cell_count_panics() {
        let _ = PuzzleGenerator::new().generate(82);
    }
}
