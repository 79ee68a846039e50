pub mod breeding;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod rng;
pub mod selection;
pub mod sharing;

// Re-export commonly used types for convenience
pub use breeding::{BreedStrategy, SinglePointStrategy};
pub use chromosome::{Chromosome, Phenotype};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    Challenge, EvolutionLauncher, EvolutionOptions, EvolutionOutcome, LogLevel, Objective,
};
pub use rng::RandomNumberGenerator;
pub use selection::{RouletteWheelSelection, Selection, SelectionStrategy, TournamentSelection};
pub use sharing::FitnessSharing;
