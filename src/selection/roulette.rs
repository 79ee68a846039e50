use tracing::debug;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{check_inputs, SelectionStrategy};
use crate::sharing::FitnessSharing;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their weight. With fitness sharing
/// enabled the weight is the shared fitness, so crowded niches spin a smaller slice
/// of the wheel.
///
/// Negative weights are clamped to zero, so an individual scoring below zero owns
/// no slice of the wheel. It can still be returned when the draw lands exactly on
/// `0.0` and it leads the wheel, since the first cumulative weight meeting the
/// draw wins. If no individual has a positive weight the wheel degenerates into a
/// uniform draw.
///
/// # Examples
///
/// ```
/// use nichealg::chromosome::Chromosome;
/// use nichealg::selection::{RouletteWheelSelection, SelectionStrategy};
/// use nichealg::sharing::FitnessSharing;
/// use nichealg::rng::RandomNumberGenerator;
/// use nichealg::error::Result;
///
/// fn main() -> Result<()> {
///     let population: Vec<Chromosome> = [10, 11, 12, 90]
///         .iter()
///         .map(|&v| Chromosome::from_value(v, 8))
///         .collect::<Result<_>>()?;
///     let fitness = vec![5.0, 5.0, 5.0, 5.0];
///     let mut rng = RandomNumberGenerator::from_seed(3);
///
///     let selection = RouletteWheelSelection::with_sharing(FitnessSharing::default());
///     let weights = selection.weigh(&population, &fitness)?;
///
///     // The loner at 90 outweighs each member of the crowded niche around 11
///     assert!(weights[3] > weights[1]);
///
///     let parent = selection.pick(&weights, &mut rng)?;
///     assert!(parent < population.len());
///
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouletteWheelSelection {
    /// Sharing scheme applied to raw fitness before the wheel is built.
    sharing: Option<FitnessSharing>,
}

impl RouletteWheelSelection {
    /// Creates a roulette over raw fitness.
    pub fn new() -> Self {
        Self { sharing: None }
    }

    /// Creates a roulette over shared fitness.
    pub fn with_sharing(sharing: FitnessSharing) -> Self {
        Self {
            sharing: Some(sharing),
        }
    }

    pub fn sharing(&self) -> Option<&FitnessSharing> {
        self.sharing.as_ref()
    }

    /// Spins the wheel once.
    ///
    /// Draws `r` uniformly from `[0, total)` and returns the first individual whose
    /// cumulative weight reaches `r`. If rounding keeps the running sum below `r`,
    /// the last individual is returned.
    fn spin(weights: &[f64], total: f64, rng: &mut RandomNumberGenerator) -> usize {
        let draw = rng.fetch_uniform(0.0, total);

        let mut cumulative = 0.0;
        for (i, &weight) in weights.iter().enumerate() {
            cumulative += weight;
            if cumulative >= draw {
                return i;
            }
        }

        weights.len() - 1
    }
}

impl SelectionStrategy for RouletteWheelSelection {
    fn validate(&self) -> Result<()> {
        match &self.sharing {
            Some(sharing) => sharing.validate(),
            None => Ok(()),
        }
    }

    fn weigh(&self, population: &[Chromosome], fitness: &[f64]) -> Result<Vec<f64>> {
        check_inputs(population, fitness)?;

        let weights = match &self.sharing {
            Some(sharing) => sharing.shared_fitness(population, fitness)?,
            None => fitness.to_vec(),
        };

        Ok(weights.into_iter().map(|w| w.max(0.0)).collect())
    }

    fn pick(&self, weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        if weights.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let total: f64 = weights.iter().sum();
        if !(total.is_finite() && total > 0.0) {
            debug!(total, "roulette wheel has no positive weight, drawing uniformly");
            return Ok(rng.gen_index(weights.len()));
        }

        Ok(Self::spin(weights, total, rng))
    }
}
