use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_inputs, SelectionStrategy};

/// Default number of contestants per tournament.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 3;

/// A selection strategy that selects individuals through tournament selection.
///
/// Each tournament samples `tournament_size` individuals uniformly at random, with
/// replacement, and returns the one with the highest raw fitness. Ties go to the
/// contestant drawn first.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - Smaller tournament sizes lead to more exploration (more random selection)
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
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
///     let population: Vec<Chromosome> = (0..5)
///         .map(|v| Chromosome::from_value(v, 5))
///         .collect::<Result<_>>()?;
///     let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
///     let mut rng = RandomNumberGenerator::from_seed(7);
///
///     let selection = TournamentSelection::new(3)?;
///     let selected = selection.select(&population, &fitness, 3, &mut rng)?;
///
///     assert_eq!(selected.len(), 3);
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Arguments
    ///
    /// * `tournament_size` - The number of individuals that participate in each tournament.
    ///   Must be at least 1. A tournament size of 1 is equivalent to random selection.
    ///
    /// # Errors
    ///
    /// Returns an error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        let selection = Self { tournament_size };
        SelectionStrategy::validate(&selection)?;
        Ok(selection)
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Result<Self> {
        self.tournament_size = tournament_size;
        SelectionStrategy::validate(&self)?;
        Ok(self)
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let mut best_idx = rng.gen_index(fitness.len());

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(fitness.len());
            if fitness[idx] > fitness[best_idx] {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self {
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn validate(&self) -> Result<()> {
        if self.tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn weigh(&self, population: &[Chromosome], fitness: &[f64]) -> Result<Vec<f64>> {
        check_inputs(population, fitness)?;
        Ok(fitness.to_vec())
    }

    fn pick(&self, weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if weights.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(self.run_tournament(weights, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(size: u64) -> Vec<Chromosome> {
        (0..size)
            .map(|v| Chromosome::from_value(v, 5).unwrap())
            .collect()
    }

    #[test]
    fn test_tournament_selection() {
        let population = population(5);
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(1);

        let selection = TournamentSelection::default();
        let selected = selection.select(&population, &fitness, 3, &mut rng).unwrap();

        // Should select 3 individuals
        assert_eq!(selected.len(), 3);
        assert!(selected.iter().all(|c| population.contains(c)));
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(2);
        let selection = TournamentSelection::new(1).unwrap();

        let mut counts = [0usize; 5];
        for _ in 0..5000 {
            counts[selection.pick(&fitness, &mut rng).unwrap()] += 1;
        }

        // Every individual, even the worst, wins its share
        assert!(counts.iter().all(|&c| c > 700));
    }

    #[test]
    fn test_large_tournament_favors_the_best() {
        let fitness = vec![0.5, 0.8, 0.3, 0.9, 0.1];
        let mut rng = RandomNumberGenerator::from_seed(3);
        let selection = TournamentSelection::new(50).unwrap();

        // 50 draws with replacement from 5 miss index 3 with probability 0.8^50
        let winners: Vec<usize> = (0..20)
            .map(|_| selection.pick(&fitness, &mut rng).unwrap())
            .collect();
        assert!(winners.iter().filter(|&&w| w == 3).count() >= 19);
    }

    #[test]
    fn test_tournament_size_larger_than_population() {
        let population = population(2);
        let fitness = vec![1.0, 2.0];
        let mut rng = RandomNumberGenerator::from_seed(4);

        let selection = TournamentSelection::new(10).unwrap();
        let selected = selection.select(&population, &fitness, 4, &mut rng).unwrap();
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_same_individual_may_be_both_parents() {
        let population = population(1);
        let fitness = vec![3.0];
        let mut rng = RandomNumberGenerator::from_seed(5);

        let selected = TournamentSelection::default()
            .select(&population, &fitness, 2, &mut rng)
            .unwrap();
        assert_eq!(selected[0], selected[1]);
    }

    #[test]
    fn test_weights_are_raw_fitness() {
        let population = population(3);
        let fitness = vec![-1.0, 0.0, 2.5];
        let weights = TournamentSelection::default()
            .weigh(&population, &fitness)
            .unwrap();
        assert_eq!(weights, fitness);
    }

    #[test]
    fn test_tournament_selection_empty_population() {
        let population: Vec<Chromosome> = Vec::new();
        let fitness: Vec<f64> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(6);

        let selection = TournamentSelection::default();
        let result = selection.select(&population, &fitness, 3, &mut rng);

        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
        assert!(selection.pick(&[], &mut rng).is_err());
    }

    #[test]
    fn test_tournament_selection_mismatched_lengths() {
        let population = population(2);
        let fitness = vec![0.5];
        let mut rng = RandomNumberGenerator::from_seed(7);

        let selection = TournamentSelection::default();
        let result = selection.select(&population, &fitness, 1, &mut rng);

        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_tournament_selection_invalid_size() {
        // Tournament size must be at least 1
        assert!(TournamentSelection::new(0).is_err());
        assert!(TournamentSelection::default().with_tournament_size(0).is_err());
        assert_eq!(
            TournamentSelection::default()
                .with_tournament_size(4)
                .unwrap()
                .tournament_size(),
            4
        );
    }
}
