//! # Challenge
//!
//! A `Challenge` scores a phenotype. Higher scores are better. The crate ships the
//! two objectives of [`Objective`], and any `Fn(u64) -> f64` closure is a challenge
//! as well.
//!
//! ```rust
//! use nichealg::evolution::{Challenge, Objective};
//!
//! assert_eq!(Objective::Square.score(7), 49.0);
//!
//! let shifted = |x: u64| -((x as f64) - 10.0).abs();
//! assert_eq!(shifted.score(10), 0.0);
//! ```

use std::f64::consts::PI;

use crate::chromosome::Phenotype;

/// Frequency of the damped sine, giving two full periods over `[0, 255]`.
pub const DAMPED_SINE_ALPHA: f64 = 4.0 * PI / 256.0;

pub trait Challenge: Send + Sync {
    fn score(&self, phenotype: Phenotype) -> f64;
}

impl<F> Challenge for F
where
    F: Fn(Phenotype) -> f64 + Send + Sync,
{
    fn score(&self, phenotype: Phenotype) -> f64 {
        self(phenotype)
    }
}

/// Built-in objective functions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Objective {
    /// `f(x) = x^2`, a single optimum at the upper bound.
    Square,
    /// `f(x) = x * sin(alpha * x)`, several local maxima.
    DampedSine { alpha: f64 },
}

impl Objective {
    /// The damped sine with the default frequency [`DAMPED_SINE_ALPHA`].
    pub fn damped_sine() -> Self {
        Objective::DampedSine {
            alpha: DAMPED_SINE_ALPHA,
        }
    }
}

impl Challenge for Objective {
    fn score(&self, phenotype: Phenotype) -> f64 {
        let x = phenotype as f64;
        match self {
            Objective::Square => x * x,
            Objective::DampedSine { alpha } => x * (alpha * x).sin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_is_exact() {
        for x in 0..=31u64 {
            assert_eq!(Objective::Square.score(x), (x * x) as f64);
        }
    }

    #[test]
    fn test_damped_sine_values() {
        let objective = Objective::damped_sine();
        assert_eq!(objective.score(0), 0.0);

        // sin(alpha * 64) = sin(pi) and sin(alpha * 128) = sin(2 pi)
        assert!(objective.score(64).abs() < 1e-9);
        assert!(objective.score(128).abs() < 1e-9);

        // alpha * 32 = pi / 2
        assert!((objective.score(32) - 32.0).abs() < 1e-9);
        // alpha * 160 = 5 pi / 2
        assert!((objective.score(160) - 160.0).abs() < 1e-9);
        // alpha * 96 = 3 pi / 2
        assert!((objective.score(96) + 96.0).abs() < 1e-9);
    }

    #[test]
    fn test_damped_sine_has_several_local_maxima() {
        let objective = Objective::damped_sine();
        let values: Vec<f64> = (0..=255).map(|x| objective.score(x)).collect();
        let local_maxima = (1..255)
            .filter(|&i| values[i] > values[i - 1] && values[i] >= values[i + 1])
            .count();
        assert!(local_maxima >= 2);
    }

    #[test]
    fn test_closure_challenge() {
        let challenge = |x: Phenotype| 100.0 - x as f64;
        assert_eq!(challenge.score(40), 60.0);
    }
}
