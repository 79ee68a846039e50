//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for
//! turning a pair of parents into a pair of children, reading the recombination
//! and mutation rates from the evolution options.
pub mod single_point;

use std::fmt::Debug;

use crate::{
    chromosome::Chromosome, error::Result, evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// Produces two children from two parents. Parents are only read; children are
/// fresh copies, never aliases of a parent.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds two children from two parents.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The two parent chromosomes.
    /// - `evol_options`: The evolution options holding crossover and mutation probabilities.
    /// - `rng`: The random source of the run.
    ///
    /// ## Errors
    ///
    /// This method can fail if the parents cannot be recombined, e.g. when their
    /// lengths differ.
    fn breed(
        &self,
        parents: (&Chromosome, &Chromosome),
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)>;
}

pub use single_point::{crossover, mutate, SinglePointStrategy};
