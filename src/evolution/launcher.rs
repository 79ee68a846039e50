use std::cmp::Ordering;
use std::fmt;

use rayon::prelude::*;
use tracing::debug;

use super::{
    challenge::Challenge,
    options::EvolutionOptions,
    run::{Evolution, EvolutionState},
};
use crate::{
    breeding::{BreedStrategy, SinglePointStrategy},
    chromosome::{Chromosome, Phenotype},
    error::{GeneticError, OptionExt, Result},
    rng::RandomNumberGenerator,
    selection::{RouletteWheelSelection, Selection, SelectionStrategy, TournamentSelection},
    sharing::FitnessSharing,
};

/// An individual as reported by a run: its genotype, phenotype and raw fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The evolved chromosome.
    pub chromosome: Chromosome,
    /// The decoded value of the chromosome.
    pub phenotype: Phenotype,
    /// The raw fitness score of the phenotype, never the shared one.
    pub score: f64,
}

impl fmt::Display for EvolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x={} f(x)={:.4}",
            self.chromosome, self.phenotype, self.score
        )
    }
}

/// The leaders of one generation, ranked by raw fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    /// 1-based index of the generation.
    pub generation: usize,
    pub leaders: Vec<EvolutionResult>,
}

impl GenerationReport {
    pub fn best(&self) -> Option<&EvolutionResult> {
        self.leaders.first()
    }
}

/// Everything a finished run leaves behind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOutcome {
    /// The last generation, in population order.
    pub population: Vec<Chromosome>,
    /// The best individuals of the last generation by raw fitness.
    pub leaders: Vec<EvolutionResult>,
    /// One report per generation.
    pub history: Vec<GenerationReport>,
}

impl EvolutionOutcome {
    pub fn best(&self) -> Option<&EvolutionResult> {
        self.leaders.first()
    }

    pub fn generations(&self) -> usize {
        self.history.len()
    }
}

/// Manages the evolution process using a breeding strategy, a selection strategy
/// and a challenge.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<Strategy, Select, Chall>
where
    Strategy: BreedStrategy,
    Select: SelectionStrategy,
    Chall: Challenge,
{
    strategy: Strategy,
    selection: Select,
    challenge: Chall,
}

impl<Chall> EvolutionLauncher<SinglePointStrategy, Selection, Chall>
where
    Chall: Challenge,
{
    /// A plain generational algorithm: tournaments of three over raw fitness.
    pub fn single_peak(challenge: Chall) -> Self {
        Self::new(
            SinglePointStrategy::new(),
            TournamentSelection::default().into(),
            challenge,
        )
    }

    /// The niche-preserving algorithm: roulette wheel over shared fitness.
    pub fn multimodal(challenge: Chall, sharing: FitnessSharing) -> Self {
        Self::new(
            SinglePointStrategy::new(),
            RouletteWheelSelection::with_sharing(sharing).into(),
            challenge,
        )
    }
}

impl<Strategy, Select, Chall> EvolutionLauncher<Strategy, Select, Chall>
where
    Strategy: BreedStrategy,
    Select: SelectionStrategy,
    Chall: Challenge,
{
    /// Creates a new `EvolutionLauncher`.
    ///
    /// # Arguments
    ///
    /// * `strategy` - The breeding strategy turning parent pairs into children.
    /// * `selection` - The selection strategy choosing parents.
    /// * `challenge` - The challenge used to evaluate the fitness of phenotypes.
    pub fn new(strategy: Strategy, selection: Select, challenge: Chall) -> Self {
        Self {
            strategy,
            selection,
            challenge,
        }
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn selection(&self) -> &Select {
        &self.selection
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Validates the configuration and seeds a random initial population.
    ///
    /// The returned [`Evolution`] is advanced one generation at a time with
    /// [`Evolution::step`].
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error for invalid options or selection parameters,
    /// and a `FitnessCalculation` error if the challenge scores an initial
    /// individual with NaN or infinity.
    pub fn start(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Evolution<'_, Strategy, Select, Chall>> {
        options.validate()?;
        self.selection.validate()?;
        Evolution::new(self, options.clone(), rng)
    }

    /// Evolves a random population for exactly `num_generations` generations.
    ///
    /// # Returns
    ///
    /// The final population, its best individuals by raw fitness and the report of
    /// every generation.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options or the selection strategy are invalid
    /// - The breeding process fails
    /// - The challenge produces a non-finite score
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionOutcome> {
        self.evolve_with(options, rng, |_| {})
    }

    /// Like [`evolve`](Self::evolve), handing every generation report to `observer`
    /// as soon as the generation is complete.
    pub fn evolve_with<F>(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
        mut observer: F,
    ) -> Result<EvolutionOutcome>
    where
        F: FnMut(&GenerationReport),
    {
        let mut evolution = self.start(options, rng)?;

        while let Some(report) = evolution.step(rng)? {
            observer(&report);
        }

        debug_assert_eq!(evolution.state(), EvolutionState::Terminated);
        let outcome = evolution.finish()?;

        let best = outcome.best().ok_or_else_genetic(|| {
            GeneticError::Evolution(
                "Evolution completed but no viable candidates were produced".to_string(),
            )
        })?;
        debug!(
            generations = outcome.generations(),
            phenotype = best.phenotype,
            score = best.score,
            "evolution finished"
        );

        Ok(outcome)
    }

    /// Scores every chromosome with the challenge.
    ///
    /// Populations at or above the parallel threshold are scored with Rayon's
    /// parallel iterator; the challenge is pure, so the order of evaluation is free.
    pub(crate) fn evaluate(
        &self,
        population: &[Chromosome],
        options: &EvolutionOptions,
    ) -> Result<Vec<f64>> {
        if population.len() >= options.get_parallel_threshold() {
            population
                .par_iter()
                .map(|chromosome| self.score(chromosome))
                .collect()
        } else {
            population
                .iter()
                .map(|chromosome| self.score(chromosome))
                .collect()
        }
    }

    fn score(&self, chromosome: &Chromosome) -> Result<f64> {
        let phenotype = chromosome.decode();
        let score = self.challenge.score(phenotype);

        if !score.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered for x={}: {}",
                phenotype, score
            )));
        }

        Ok(score)
    }
}

/// The `count` best individuals by raw fitness, best first. Ties keep population order.
pub(crate) fn leaders(
    population: &[Chromosome],
    fitness: &[f64],
    count: usize,
) -> Vec<EvolutionResult> {
    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| {
        fitness[b]
            .partial_cmp(&fitness[a])
            .unwrap_or(Ordering::Equal)
    });

    ranked
        .into_iter()
        .take(count)
        .map(|idx| EvolutionResult {
            chromosome: population[idx].clone(),
            phenotype: population[idx].decode(),
            score: fitness[idx],
        })
        .collect()
}
