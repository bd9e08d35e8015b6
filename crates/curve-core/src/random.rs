//! Random scalar sources used to shape new curves.
//!
//! Curves only ever need uniform and standard-normal draws, so the stream is
//! hidden behind [`RandomSource`]. Production code wraps a `rand` generator
//! in [`RngSource`]; tests can substitute a stub returning fixed values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Normal draw via the Box-Muller transform.
    ///
    /// `1 - uniform()` keeps the logarithm's argument in `(0, 1]`.
    fn gaussian(&mut self, mean: f64, stdev: f64) -> f64 {
        let u = 1.0 - self.uniform();
        let v = self.uniform();
        let z = (-2.0 * u.ln()).sqrt() * (TAU * v).cos();
        z * stdev + mean
    }

    fn standard_normal(&mut self) -> f64 {
        self.gaussian(0.0, 1.0)
    }

    /// Uniform integer in the inclusive range `min..=max`.
    fn integer(&mut self, min: i64, max: i64) -> i64 {
        let span = (max - min + 1) as f64;
        (self.uniform() * span).floor() as i64 + min
    }
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R: Rng = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Deterministic stream for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn gaussian(&mut self, mean: f64, stdev: f64) -> f64 {
        (**self).gaussian(mean, stdev)
    }

    fn integer(&mut self, min: i64, max: i64) -> i64 {
        (**self).integer(min, max)
    }
}
