//! Uniform random numbers over a closed interval.

use std::fmt;

use rand::distr::uniform::{SampleUniform, Uniform};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Result};

/// Draws values uniformly from `[min, max]`, both ends included.
///
/// Works for every integer and float type `rand` can sample. A generator built
/// with [`Random::with_seed`] yields the same sequence on every run.
///
/// ```
/// use cherry::Random;
///
/// let mut dice = Random::with_seed(1, 6, 7)?;
/// let roll = dice.sample();
/// assert!((1..=6).contains(&roll));
/// # Ok::<(), cherry::Error>(())
/// ```
pub struct Random<T: SampleUniform> {
    rng: StdRng,
    dist: Uniform<T>,
    seed: u64,
}

impl<T: SampleUniform + fmt::Debug> Random<T> {
    /// Creates a generator seeded from OS entropy.
    pub fn new(min: T, max: T) -> Result<Self> {
        let seed = rand::rng().random();
        Self::with_seed(min, max, seed)
    }

    /// Creates a reproducible generator.
    ///
    /// Fails with [`Error::InvalidRange`] if `min > max` or a float bound is
    /// not finite.
    pub fn with_seed(min: T, max: T, seed: u64) -> Result<Self> {
        let dist = Uniform::new_inclusive(&min, &max).map_err(|err| {
            tracing::debug!(?min, ?max, %err, "rejected random range");
            Error::InvalidRange {
                min: format!("{min:?}"),
                max: format!("{max:?}"),
            }
        })?;
        tracing::debug!(?min, ?max, seed, "seeded random generator");
        Ok(Random {
            rng: StdRng::seed_from_u64(seed),
            dist,
            seed,
        })
    }
}

impl<T: SampleUniform> Random<T> {
    /// Draws one value.
    #[inline]
    pub fn sample(&mut self) -> T {
        self.rng.sample(&self.dist)
    }

    /// The seed the generator started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<T: SampleUniform> Iterator for Random<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.sample())
    }
}

impl<T: SampleUniform> fmt::Debug for Random<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Random")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// An `i32` from the thread-local generator.
pub fn global_random_int() -> i32 {
    rand::rng().random()
}
