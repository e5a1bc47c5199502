//! Wall-clock budget for the bounded search.

use std::time::{Duration, Instant};

use rand::{Rng, RngExt, SeedableRng};
use rand_pcg::Pcg32;

/// How often [`Deadline::check`] actually reads the clock, as a 1-in-N
/// sample.
const SAMPLE_DENOMINATOR: u32 = 64;

/// The bounded search ran past its wall-clock budget.
///
/// Raised only from [`count_solutions_bounded`]; it unwinds the entire
/// recursive chain so the caller can discard the attempt and start over.
///
/// [`count_solutions_bounded`]: crate::count_solutions_bounded
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("solution search exceeded its time budget")]
pub struct SearchTimeout;

/// A wall-clock budget threaded through the counting recursion.
///
/// Reading `Instant::now` on every recursive call would cost more than the
/// work it guards, so [`check`](Self::check) samples the clock on roughly
/// one call in 64, drawn from a private PCG stream. An exhausted budget is
/// therefore noticed a short, random distance past the limit rather than
/// exactly on it, which is all the restart loop needs.
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    budget: Option<Duration>,
    sampler: Pcg32,
}

impl Deadline {
    /// Starts a deadline `budget` from now.
    ///
    /// The clock sampler seeds its stream from `rng`, so a seeded run also
    /// samples the clock at reproducible points.
    #[must_use]
    pub fn new(budget: Duration, rng: &mut impl Rng) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
            sampler: Pcg32::from_rng(rng),
        }
    }

    /// A deadline that never expires.
    ///
    /// Callers that need the total counting behavior (elimination, tests)
    /// run under this; `check` never fails and never reads the clock.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
            sampler: Pcg32::seed_from_u64(0),
        }
    }

    /// Time elapsed since the deadline started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Fails once the budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchTimeout`] when a sampled clock read lands past the
    /// budget. Unbounded deadlines never fail.
    pub fn check(&mut self) -> Result<(), SearchTimeout> {
        let Some(budget) = self.budget else {
            return Ok(());
        };
        if self.sampler.random_ratio(1, SAMPLE_DENOMINATOR) && self.start.elapsed() > budget {
            return Err(SearchTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_unbounded_never_expires() {
        let mut deadline = Deadline::unbounded();
        for _ in 0..10_000 {
            assert_eq!(deadline.check(), Ok(()));
        }
    }

    #[test]
    fn test_zero_budget_expires() {
        let mut rng = Pcg64::seed_from_u64(42);
        let mut deadline = Deadline::new(Duration::ZERO, &mut rng);

        // The sampler fires on roughly 1 check in 64; give it plenty.
        let expired = (0..100_000).any(|_| deadline.check().is_err());
        assert!(expired);
    }

    #[test]
    fn test_generous_budget_holds() {
        let mut rng = Pcg64::seed_from_u64(42);
        let mut deadline = Deadline::new(Duration::from_secs(3600), &mut rng);
        for _ in 0..10_000 {
            assert_eq!(deadline.check(), Ok(()));
        }
    }
}
