//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the per-run parameters of the genetic
//! algorithm. Options are validated when a run starts and are not modified while
//! it is in progress.
//!
//! ## Example
//!
//! ```rust
//! use nichealg::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // The classic x^2 setup: 5 bits, 10 individuals, 20 generations
//! let single_peak = EvolutionOptions::single_peak();
//! assert_eq!(single_peak.get_chromosome_length(), 5);
//!
//! // A custom setup through the builder
//! let custom = EvolutionOptions::builder()
//!     .chromosome_length(8)
//!     .population_size(40)
//!     .num_generations(100)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//! assert!(custom.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `num_generations`: The number of generations, always run to completion.
//! - `log_level`: The logging level, represented by the `LogLevel` enum.
//! - `population_size`: The number of individuals in every generation.
//! - `chromosome_length`: The number of bits per chromosome.
//! - `crossover_probability`: The chance that a parent pair is recombined.
//! - `mutation_probability`: The chance that any single bit flips.
//! - `report_size`: How many leaders each generation report lists.
//! - `summary_size`: How many leaders the final outcome lists.
//! - `parallel_threshold`: The population size from which fitness is evaluated in parallel.

use crate::chromosome::check_length;
use crate::error::{GeneticError, Result};

const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How much a run reports through `tracing`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Every leader of every generation, plus the decoded population.
    Verbose,
    /// The best individual of every generation.
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    chromosome_length: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    report_size: usize,
    summary_size: usize,
    /// Minimum number of individuals to evaluate in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        chromosome_length: usize,
        crossover_probability: f64,
        mutation_probability: f64,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            chromosome_length,
            crossover_probability,
            mutation_probability,
            report_size: 1,
            summary_size: 1,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Maximizing `x^2` over 5 bits.
    pub fn single_peak() -> Self {
        Self::new(20, LogLevel::None, 10, 5, 0.8, 0.01)
    }

    /// Maximizing the damped sine over 8 bits with a plain tournament.
    pub fn damped_sine() -> Self {
        Self::new(50, LogLevel::None, 20, 8, 0.7, 0.02)
    }

    /// Niche-preserving search over 8 bits, reporting the top 3 per generation
    /// and the top 5 at the end.
    pub fn multimodal() -> Self {
        Self {
            report_size: 3,
            summary_size: 5,
            ..Self::new(60, LogLevel::None, 30, 8, 0.7, 0.02)
        }
    }

    /// Rejects any option that cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the population size, report size or
    /// summary size is zero, if the chromosome length is outside `1..=64`, or if a
    /// probability lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        check_length(self.chromosome_length)?;

        check_probability("Crossover", self.crossover_probability)?;
        check_probability("Mutation", self.mutation_probability)?;

        if self.report_size == 0 {
            return Err(GeneticError::Configuration(
                "Report size cannot be zero".to_string(),
            ));
        }

        if self.summary_size == 0 {
            return Err(GeneticError::Configuration(
                "Summary size cannot be zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_chromosome_length(&self) -> usize {
        self.chromosome_length
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_report_size(&self) -> usize {
        self.report_size
    }

    pub fn get_summary_size(&self) -> usize {
        self.summary_size
    }

    /// Returns the minimum number of individuals to evaluate in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_report_size(&mut self, report_size: usize) {
        self.report_size = report_size;
    }

    pub fn set_summary_size(&mut self, summary_size: usize) {
        self.summary_size = summary_size;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// Unset fields fall back to [`EvolutionOptions::default`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use nichealg::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(200)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(50)
    ///     .mutation_probability(0.05)
    ///     .parallel_threshold(500)
    ///     .build();
    /// assert_eq!(options.get_chromosome_length(), 5);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

fn check_probability(name: &str, probability: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(GeneticError::Configuration(format!(
            "{} probability must lie in [0, 1], got {}",
            name, probability
        )));
    }
    Ok(())
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self::single_peak()
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    chromosome_length: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    report_size: Option<usize>,
    summary_size: Option<usize>,
    parallel_threshold: Option<usize>,
}

impl EvolutionOptionsBuilder {
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn chromosome_length(mut self, value: usize) -> Self {
        self.chromosome_length = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn report_size(mut self, value: usize) -> Self {
        self.report_size = Some(value);
        self
    }

    pub fn summary_size(mut self, value: usize) -> Self {
        self.summary_size = Some(value);
        self
    }

    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance. Validation happens when a run starts.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            population_size: self.population_size.unwrap_or(defaults.population_size),
            chromosome_length: self
                .chromosome_length
                .unwrap_or(defaults.chromosome_length),
            crossover_probability: self
                .crossover_probability
                .unwrap_or(defaults.crossover_probability),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(defaults.mutation_probability),
            report_size: self.report_size.unwrap_or(defaults.report_size),
            summary_size: self.summary_size.unwrap_or(defaults.summary_size),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        }
    }
}
