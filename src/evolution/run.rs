//! # Evolution
//!
//! A run in progress. An `Evolution` moves through three states: it is
//! `Initialized` with a random population, `Running` once generations have been
//! replaced, and `Terminated` after exactly `num_generations` replacements. There is
//! no early exit and no elitism: every generation is bred entirely from the previous
//! one, so the best score may go down between generations.
//!
//! ```rust
//! use nichealg::evolution::{EvolutionLauncher, EvolutionOptions, EvolutionState, Objective};
//! use nichealg::rng::RandomNumberGenerator;
//!
//! let launcher = EvolutionLauncher::single_peak(Objective::Square);
//! let options = EvolutionOptions::single_peak();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! let mut evolution = launcher.start(&options, &mut rng).unwrap();
//! assert_eq!(evolution.state(), EvolutionState::Initialized);
//!
//! let report = evolution.step(&mut rng).unwrap().unwrap();
//! assert_eq!(report.generation, 1);
//! assert_eq!(evolution.state(), EvolutionState::Running { generation: 1 });
//!
//! while evolution.step(&mut rng).unwrap().is_some() {}
//! assert_eq!(evolution.state(), EvolutionState::Terminated);
//!
//! let outcome = evolution.finish().unwrap();
//! assert_eq!(outcome.generations(), 20);
//! ```

use tracing::{debug, info};

use super::{
    challenge::Challenge,
    launcher::{leaders, EvolutionLauncher, EvolutionOutcome, GenerationReport},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    breeding::BreedStrategy,
    chromosome::{Chromosome, Phenotype},
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
    selection::SelectionStrategy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionState {
    Initialized,
    Running { generation: usize },
    Terminated,
}

/// A run of an [`EvolutionLauncher`], advanced one generation per [`step`](Evolution::step).
#[derive(Debug)]
pub struct Evolution<'a, Strategy, Select, Chall>
where
    Strategy: BreedStrategy,
    Select: SelectionStrategy,
    Chall: Challenge,
{
    launcher: &'a EvolutionLauncher<Strategy, Select, Chall>,
    options: EvolutionOptions,
    population: Vec<Chromosome>,
    fitness: Vec<f64>,
    generation: usize,
    history: Vec<GenerationReport>,
}

impl<'a, Strategy, Select, Chall> Evolution<'a, Strategy, Select, Chall>
where
    Strategy: BreedStrategy,
    Select: SelectionStrategy,
    Chall: Challenge,
{
    /// Seeds the initial population. Options must already be validated.
    pub(crate) fn new(
        launcher: &'a EvolutionLauncher<Strategy, Select, Chall>,
        options: EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let population: Vec<Chromosome> = (0..options.get_population_size())
            .map(|_| Chromosome::random(options.get_chromosome_length(), rng))
            .collect();
        let fitness = launcher.evaluate(&population, &options)?;

        debug!(
            population_size = options.get_population_size(),
            chromosome_length = options.get_chromosome_length(),
            generations = options.get_num_generations(),
            "initialized population"
        );

        Ok(Self {
            launcher,
            history: Vec::with_capacity(options.get_num_generations()),
            options,
            population,
            fitness,
            generation: 0,
        })
    }

    pub fn state(&self) -> EvolutionState {
        if self.generation >= self.options.get_num_generations() {
            EvolutionState::Terminated
        } else if self.generation == 0 {
            EvolutionState::Initialized
        } else {
            EvolutionState::Running {
                generation: self.generation,
            }
        }
    }

    /// Number of generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Raw fitness of the current population, in population order.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn history(&self) -> &[GenerationReport] {
        &self.history
    }

    /// Breeds the next generation and replaces the current one with it.
    ///
    /// Selection weights are computed once, then parent pairs are drawn and bred
    /// until the new population holds exactly `population_size` individuals. When
    /// the size is odd, the second child of the last pair is dropped.
    ///
    /// # Returns
    ///
    /// The report of the new generation, or `None` once the run is terminated.
    pub fn step(&mut self, rng: &mut RandomNumberGenerator) -> Result<Option<GenerationReport>> {
        if self.state() == EvolutionState::Terminated {
            return Ok(None);
        }

        let population_size = self.options.get_population_size();
        let generation = self.generation + 1;
        let selection = self.launcher.selection();
        let strategy = self.launcher.strategy();

        let weights = selection.weigh(&self.population, &self.fitness)?;

        let mut next_generation = Vec::with_capacity(population_size);
        while next_generation.len() < population_size {
            let first = selection.pick(&weights, rng)?;
            let second = selection.pick(&weights, rng)?;

            let (child1, child2) = strategy
                .breed(
                    (&self.population[first], &self.population[second]),
                    &self.options,
                    rng,
                )
                .map_err(|e| {
                    GeneticError::Breeding(format!(
                        "Failed to breed generation {}: {}",
                        generation, e
                    ))
                })?;

            next_generation.push(child1);
            if next_generation.len() < population_size {
                next_generation.push(child2);
            }
        }

        let fitness = self.launcher.evaluate(&next_generation, &self.options)?;
        self.population = next_generation;
        self.fitness = fitness;
        self.generation = generation;

        let report = GenerationReport {
            generation,
            leaders: leaders(&self.population, &self.fitness, self.options.get_report_size()),
        };
        self.log_report(&report);
        self.history.push(report.clone());

        Ok(Some(report))
    }

    /// Consumes a terminated run and ranks its final population.
    ///
    /// # Errors
    ///
    /// Returns an `Evolution` error if generations remain to be run.
    pub fn finish(self) -> Result<EvolutionOutcome> {
        if self.state() != EvolutionState::Terminated {
            return Err(GeneticError::Evolution(format!(
                "Run stopped after {} of {} generations",
                self.generation,
                self.options.get_num_generations()
            )));
        }

        Ok(EvolutionOutcome {
            leaders: leaders(
                &self.population,
                &self.fitness,
                self.options.get_summary_size(),
            ),
            population: self.population,
            history: self.history,
        })
    }

    fn log_report(&self, report: &GenerationReport) {
        match self.options.get_log_level() {
            LogLevel::Minimal => {
                if let Some(best) = report.best() {
                    info!(
                        generation = report.generation,
                        chromosome = %best.chromosome,
                        phenotype = best.phenotype,
                        score = best.score,
                        "generation best"
                    );
                }
            }
            LogLevel::Verbose => {
                for (rank, leader) in report.leaders.iter().enumerate() {
                    info!(
                        generation = report.generation,
                        rank = rank + 1,
                        chromosome = %leader.chromosome,
                        phenotype = leader.phenotype,
                        score = leader.score,
                        "generation leader"
                    );
                }
                let phenotypes: Vec<Phenotype> =
                    self.population.iter().map(Chromosome::decode).collect();
                debug!(generation = report.generation, population = ?phenotypes);
            }
            LogLevel::None => {}
        }
    }
}
