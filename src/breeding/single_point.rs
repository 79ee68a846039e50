//! # SinglePointStrategy
//!
//! Single-point crossover followed by independent per-bit mutation of each child.
//!
//! ```rust
//! use nichealg::breeding::{crossover, mutate};
//! use nichealg::chromosome::Chromosome;
//! use nichealg::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(0);
//! let left: Chromosome = "11111".parse().unwrap();
//! let right: Chromosome = "00000".parse().unwrap();
//!
//! let (c1, c2) = crossover(&left, &right, 1.0, &mut rng);
//! // Every crossover point keeps a 1-prefix on the first child
//! assert!(c1.bits()[0] && !c2.bits()[0]);
//!
//! assert_eq!(mutate(&c1, 0.0, &mut rng), c1);
//! ```

use super::BreedStrategy;
use crate::{
    chromosome::Chromosome,
    error::{GeneticError, Result},
    evolution::options::EvolutionOptions,
    rng::RandomNumberGenerator,
};

/// Single-point crossover.
///
/// With probability `probability` a point is drawn uniformly from `1..=L-1` and the
/// tails are swapped: `c1 = p1[..point] + p2[point..]`, `c2 = p2[..point] + p1[point..]`.
/// Otherwise, and always for chromosomes shorter than two bits, the children are
/// copies of the parents.
///
/// Both parents must have the same length.
pub fn crossover(
    first: &Chromosome,
    second: &Chromosome,
    probability: f64,
    rng: &mut RandomNumberGenerator,
) -> (Chromosome, Chromosome) {
    let length = first.len().min(second.len());

    if length < 2 || !rng.gen_bool(probability) {
        return (first.clone(), second.clone());
    }

    let point = rng.gen_range_inclusive(1, length - 1);
    (first.splice(second, point), second.splice(first, point))
}

/// Per-bit mutation: every position flips independently with probability `probability`.
pub fn mutate(
    chromosome: &Chromosome,
    probability: f64,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    let mut mutated = chromosome.clone();
    for position in 0..mutated.len() {
        if rng.gen_bool(probability) {
            mutated.flip(position);
        }
    }
    mutated
}

/// Crossover, then mutation of each child independently.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct SinglePointStrategy;

impl SinglePointStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl BreedStrategy for SinglePointStrategy {
    fn breed(
        &self,
        parents: (&Chromosome, &Chromosome),
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<(Chromosome, Chromosome)> {
        let (first, second) = parents;

        if first.len() != second.len() {
            return Err(GeneticError::Breeding(format!(
                "Parents differ in length ({} vs {})",
                first.len(),
                second.len()
            )));
        }

        let (child1, child2) =
            crossover(first, second, evol_options.get_crossover_probability(), rng);

        let mutation_probability = evol_options.get_mutation_probability();
        Ok((
            mutate(&child1, mutation_probability, rng),
            mutate(&child2, mutation_probability, rng),
        ))
    }
}
