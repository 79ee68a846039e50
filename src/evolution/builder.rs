use crate::{
    breeding::BreedStrategy,
    error::{GeneticError, Result},
    selection::SelectionStrategy,
};

use super::{Challenge, EvolutionLauncher};

/// Assembles an [`EvolutionLauncher`] piece by piece.
///
/// The breeding strategy falls back to its `Default` when none is given; the
/// selection strategy and the challenge are required.
pub struct EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy + Default,
    S: SelectionStrategy,
    C: Challenge,
{
    breed_strategy: Option<B>,
    selection_strategy: Option<S>,
    challenge: Option<C>,
}

impl<B, S, C> EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy + Default,
    S: SelectionStrategy,
    C: Challenge,
{
    pub fn new() -> Self {
        Self {
            breed_strategy: None,
            selection_strategy: None,
            challenge: None,
        }
    }

    pub fn with_breed_strategy(mut self, breed_strategy: B) -> Self {
        self.breed_strategy = Some(breed_strategy);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<B, S, C>> {
        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;
        selection_strategy.validate()?;

        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            self.breed_strategy.unwrap_or_default(),
            selection_strategy,
            challenge,
        ))
    }
}

impl<B, S, C> Default for EvolutionLauncherBuilder<B, S, C>
where
    B: BreedStrategy + Default,
    S: SelectionStrategy,
    C: Challenge,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::SinglePointStrategy;
    use crate::evolution::Objective;
    use crate::selection::{RouletteWheelSelection, Selection, TournamentSelection};
    use crate::sharing::FitnessSharing;

    type Builder = EvolutionLauncherBuilder<SinglePointStrategy, Selection, Objective>;

    #[test]
    fn test_build_complete_launcher() {
        let launcher = Builder::new()
            .with_breed_strategy(SinglePointStrategy::new())
            .with_selection_strategy(TournamentSelection::default().into())
            .with_challenge(Objective::Square)
            .build()
            .unwrap();

        assert_eq!(launcher.challenge(), &Objective::Square);
    }

    #[test]
    fn test_breed_strategy_defaults() {
        let launcher = Builder::default()
            .with_selection_strategy(RouletteWheelSelection::new().into())
            .with_challenge(Objective::damped_sine())
            .build();

        assert!(launcher.is_ok());
    }

    #[test]
    fn test_missing_selection_strategy() {
        let result = Builder::new().with_challenge(Objective::Square).build();

        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Selection strategy not specified"))
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_missing_challenge() {
        let result = Builder::new()
            .with_selection_strategy(TournamentSelection::default().into())
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Challenge not specified")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_invalid_selection_is_rejected() {
        let sharing = FitnessSharing {
            sigma: -1.0,
            ..FitnessSharing::default()
        };
        let result = Builder::new()
            .with_selection_strategy(RouletteWheelSelection::with_sharing(sharing).into())
            .with_challenge(Objective::Square)
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Niche radius")),
            _ => panic!("Expected Configuration error"),
        }
    }
}
