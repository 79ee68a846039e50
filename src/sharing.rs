//! # Fitness Sharing
//!
//! Fitness sharing keeps a population spread over several optima. Every individual
//! divides its raw fitness by its *niche count*, the sum of the sharing kernel over
//! its distance to every member of the population (itself included). Individuals
//! crowding a popular peak therefore lose selection pressure to individuals of
//! comparable quality in emptier niches.
//!
//! Distances are measured in phenotype space: the absolute difference of the
//! decoded values, so two different bit strings that decode to the same value
//! are at distance zero.
//!
//! ## Example
//!
//! ```rust
//! use nichealg::chromosome::Chromosome;
//! use nichealg::sharing::FitnessSharing;
//!
//! let population = vec![
//!     Chromosome::from_value(10, 8).unwrap(),
//!     Chromosome::from_value(10, 8).unwrap(),
//!     Chromosome::from_value(200, 8).unwrap(),
//! ];
//! let raw = vec![6.0, 6.0, 6.0];
//!
//! let sharing = FitnessSharing::default();
//! let shared = sharing.shared_fitness(&population, &raw).unwrap();
//!
//! // The two twins split their niche, the loner keeps its full fitness.
//! assert_eq!(shared, vec![3.0, 3.0, 6.0]);
//! ```

use rayon::prelude::*;

use crate::chromosome::{Chromosome, Phenotype};
use crate::error::{GeneticError, Result};

/// Stand-in for a niche count of exactly zero.
pub const NICHE_COUNT_FLOOR: f64 = 1e-9;

/// Default niche radius.
pub const DEFAULT_SIGMA: f64 = 5.0;

/// Default sharing exponent.
pub const DEFAULT_ALPHA: f64 = 1.0;

const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// Phenotypic distance between two chromosomes.
pub fn distance(a: &Chromosome, b: &Chromosome) -> f64 {
    phenotype_distance(a.decode(), b.decode())
}

fn phenotype_distance(a: Phenotype, b: Phenotype) -> f64 {
    a.abs_diff(b) as f64
}

/// The sharing kernel `sh(d)`.
///
/// Returns `1 - (d / sigma)^alpha` inside the niche radius and `0` at or beyond it.
pub fn sharing_kernel(distance: f64, sigma: f64, alpha: f64) -> f64 {
    if distance < sigma {
        1.0 - (distance / sigma).powf(alpha)
    } else {
        0.0
    }
}

/// Parameters of the fitness sharing scheme.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessSharing {
    /// Niche radius.
    pub(crate) sigma: f64,
    /// Shape of the kernel; 1.0 gives a triangular kernel.
    pub(crate) alpha: f64,
    /// Population size from which niche counts are computed in parallel.
    #[cfg_attr(feature = "serde", serde(default = "default_parallel_threshold"))]
    pub(crate) parallel_threshold: usize,
}

#[cfg(feature = "serde")]
fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl FitnessSharing {
    /// Creates a sharing scheme with niche radius `sigma` and exponent `alpha`.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if either parameter is not a positive,
    /// finite number.
    pub fn new(sigma: f64, alpha: f64) -> Result<Self> {
        let sharing = Self {
            sigma,
            alpha,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        };
        sharing.validate()?;
        Ok(sharing)
    }

    /// Checks that both parameters are positive, finite numbers.
    pub fn validate(&self) -> Result<()> {
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Niche radius must be positive, got {}",
                self.sigma
            )));
        }
        if !(self.alpha.is_finite() && self.alpha > 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Sharing exponent must be positive, got {}",
                self.alpha
            )));
        }
        Ok(())
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// The sharing kernel with this scheme's parameters.
    pub fn kernel(&self, distance: f64) -> f64 {
        sharing_kernel(distance, self.sigma, self.alpha)
    }

    /// Niche count of the individual at `index`, the kernel summed over the whole
    /// population including the individual itself.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn niche_count(&self, population: &[Chromosome], index: usize) -> f64 {
        let phenotypes: Vec<Phenotype> = population.iter().map(Chromosome::decode).collect();
        self.niche_count_of(&phenotypes, phenotypes[index])
    }

    fn niche_count_of(&self, phenotypes: &[Phenotype], phenotype: Phenotype) -> f64 {
        phenotypes
            .iter()
            .map(|&other| self.kernel(phenotype_distance(phenotype, other)))
            .sum()
    }

    /// Shared fitness of every individual: raw fitness divided by niche count.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or if `raw_fitness` does not
    /// hold one value per individual.
    pub fn shared_fitness(&self, population: &[Chromosome], raw_fitness: &[f64]) -> Result<Vec<f64>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        if raw_fitness.len() != population.len() {
            return Err(GeneticError::Configuration(format!(
                "Fitness vector length ({}) doesn't match population length ({})",
                raw_fitness.len(),
                population.len()
            )));
        }

        let phenotypes: Vec<Phenotype> = population.iter().map(Chromosome::decode).collect();

        let share = |(&phenotype, &raw): (&Phenotype, &f64)| {
            let mut niche_count = self.niche_count_of(&phenotypes, phenotype);
            if niche_count == 0.0 {
                niche_count = NICHE_COUNT_FLOOR;
            }
            raw / niche_count
        };

        // The pairwise sum is quadratic, so large populations go wide
        let shared: Vec<f64> = if phenotypes.len() >= self.parallel_threshold {
            phenotypes.par_iter().zip(raw_fitness.par_iter()).map(share).collect()
        } else {
            phenotypes.iter().zip(raw_fitness.iter()).map(share).collect()
        };

        Ok(shared)
    }
}

impl Default for FitnessSharing {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            alpha: DEFAULT_ALPHA,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}
