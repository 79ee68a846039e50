pub mod roulette;
pub mod selection_strategy;
pub mod tournament;

pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::{TournamentSelection, DEFAULT_TOURNAMENT_SIZE};

use crate::chromosome::Chromosome;
use crate::error::Result;
use crate::rng::RandomNumberGenerator;

/// Selection strategy chosen at run time.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Tournament(TournamentSelection),
    Roulette(RouletteWheelSelection),
}

impl SelectionStrategy for Selection {
    fn validate(&self) -> Result<()> {
        match self {
            Selection::Tournament(s) => s.validate(),
            Selection::Roulette(s) => s.validate(),
        }
    }

    fn weigh(&self, population: &[Chromosome], fitness: &[f64]) -> Result<Vec<f64>> {
        match self {
            Selection::Tournament(s) => s.weigh(population, fitness),
            Selection::Roulette(s) => s.weigh(population, fitness),
        }
    }

    fn pick(&self, weights: &[f64], rng: &mut RandomNumberGenerator) -> Result<usize> {
        match self {
            Selection::Tournament(s) => s.pick(weights, rng),
            Selection::Roulette(s) => s.pick(weights, rng),
        }
    }
}

impl From<TournamentSelection> for Selection {
    fn from(selection: TournamentSelection) -> Self {
        Selection::Tournament(selection)
    }
}

impl From<RouletteWheelSelection> for Selection {
    fn from(selection: RouletteWheelSelection) -> Self {
        Selection::Roulette(selection)
    }
}
