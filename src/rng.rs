//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single random source of a run. Every
//! random draw of the engine (initial bits, tournament samples, roulette spins,
//! crossover points and mutation trials) goes through one instance, so seeding it
//! makes a whole run reproducible.
//!
//! ## Example
//!
//! ```rust
//! use nichealg::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let spin = rng.fetch_uniform(0.0, 10.0);
//! assert!((0.0..10.0).contains(&spin));
//!
//! let index = rng.gen_index(30);
//! assert!(index < 30);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws a genetic
/// algorithm needs.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a single fair bit.
    pub fn gen_bit(&mut self) -> bool {
        self.rng.gen()
    }

    /// Runs one Bernoulli trial that succeeds with the given probability.
    ///
    /// Probabilities are clamped into `[0, 1]` and NaN never succeeds; callers
    /// validate them up front.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        if probability.is_nan() || probability <= 0.0 {
            return false;
        }
        if probability >= 1.0 {
            return true;
        }
        self.rng.gen_bool(probability)
    }

    /// Draws an index uniformly from `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Draws an integer uniformly from `low..=high`.
    pub fn gen_range_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    /// Draws a real number uniformly from `[from, to)`.
    ///
    /// An empty range yields `from`.
    pub fn fetch_uniform(&mut self, from: f64, to: f64) -> f64 {
        if from >= to {
            return from;
        }
        self.rng.gen_range(from..to)
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
