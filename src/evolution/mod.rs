pub mod builder;
pub mod challenge;
pub mod launcher;
pub mod options;
pub mod run;

pub use builder::EvolutionLauncherBuilder;
pub use challenge::{Challenge, Objective, DAMPED_SINE_ALPHA};
pub use launcher::{EvolutionLauncher, EvolutionOutcome, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
pub use run::{Evolution, EvolutionState};
