use std::fmt::Debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// Selection happens in two phases. [`weigh`](SelectionStrategy::weigh) turns the
/// raw fitness of a population into selection weights once per generation, and
/// [`pick`](SelectionStrategy::pick) draws a single parent index from those
/// weights. Weighing once keeps every draw of a generation on the same
/// selection pressure, which matters when the weights depend on the whole
/// population as with fitness sharing.
///
/// Selection never modifies the population.
///
/// # Examples
///
/// ```
/// use nichealg::chromosome::Chromosome;
/// use nichealg::selection::{SelectionStrategy, TournamentSelection};
/// use nichealg::rng::RandomNumberGenerator;
/// use nichealg::error::Result;
///
/// fn main() -> Result<()> {
///     let population = vec![
///         Chromosome::from_value(1, 5)?,
///         Chromosome::from_value(2, 5)?,
///         Chromosome::from_value(3, 5)?,
///     ];
///     let fitness = vec![1.0, 4.0, 9.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = TournamentSelection::default();
///     let parents = selection.select(&population, &fitness, 2, &mut rng)?;
///
///     assert_eq!(parents.len(), 2);
///
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Rejects parameters that cannot drive a run.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Computes one selection weight per individual.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty or if the fitness vector length
    /// doesn't match the population length.
    fn weigh(&self, population: &[Chromosome], fitness: &[f64]) -> Result<Vec<f64>>;

    /// Draws the index of one parent from weights produced by [`weigh`](SelectionStrategy::weigh).
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` if `weights` is empty.
    fn pick(&self, weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize>;

    /// Selects `num_to_select` individuals, weighing the population once for the
    /// whole batch. The same individual may be selected more than once.
    fn select(
        &self,
        population: &[Chromosome],
        fitness: &[f64],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Chromosome>> {
        let weights = self.weigh(population, fitness)?;
        (0..num_to_select)
            .map(|_| self.pick(&weights, rng).map(|idx| population[idx].clone()))
            .collect()
    }
}

pub(crate) fn check_inputs(population: &[Chromosome], fitness: &[f64]) -> Result<()> {
    if population.is_empty() {
        return Err(GeneticError::EmptyPopulation);
    }

    if fitness.len() != population.len() {
        return Err(GeneticError::Configuration(format!(
            "Fitness vector length ({}) doesn't match population length ({})",
            fitness.len(),
            population.len()
        )));
    }

    Ok(())
}
