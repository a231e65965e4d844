//! Game factory: validated configuration, metadata, initial states, observers.

use super::state::SchafkopfState;
use crate::core::{GameConfig, GameError, GameInfo, GameType, PlayerId, ReturnsNormalization};
use crate::observation::{ObservationType, ObserverParams, SchafkopfObserver};

/// A configured Schafkopf table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchafkopfGame {
    config: GameConfig,
}

impl SchafkopfGame {
    /// Create a game, rejecting configurations that cannot be dealt.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn info(&self) -> GameInfo {
        self.config.info()
    }

    #[must_use]
    pub fn game_type(&self) -> GameType {
        GameType::for_config(&self.config)
    }

    /// State at the start of the deal.
    #[must_use]
    pub fn new_initial_state(&self) -> SchafkopfState {
        SchafkopfState::new(self.config)
    }

    /// Observer sized for this table.
    pub fn make_observer(
        &self,
        obs_type: ObservationType,
        params: &ObserverParams,
    ) -> Result<SchafkopfObserver, GameError> {
        SchafkopfObserver::new(&self.config, obs_type, params)
    }
}

/// Builder for creating a SchafkopfGame.
#[derive(Default)]
pub struct SchafkopfGameBuilder {
    config: GameConfig,
}

impl SchafkopfGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn suit_count(mut self, count: usize) -> Self {
        self.config.suit_count = count;
        self
    }

    pub fn starting_seat(mut self, seat: PlayerId) -> Self {
        self.config.starting_seat = seat;
        self
    }

    pub fn normalization(mut self, normalization: ReturnsNormalization) -> Self {
        self.config.normalization = normalization;
        self
    }

    /// Build the game and its initial state.
    pub fn build(self) -> Result<(SchafkopfGame, SchafkopfState), GameError> {
        let game = SchafkopfGame::new(self.config)?;
        let state = game.new_initial_state();
        Ok((game, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Actor;
    use crate::rules::RulesEngine;

    #[test]
    fn test_default_game() {
        let game = SchafkopfGame::default();
        let state = game.new_initial_state();

        assert_eq!(game.info().num_players, 3);
        assert_eq!(state.current_actor(), Actor::Chance);
        assert_eq!(state.player_count(), 3);
    }

    #[test]
    fn test_builder() {
        let (game, state) = SchafkopfGameBuilder::new()
            .player_count(4)
            .suit_count(4)
            .starting_seat(PlayerId::new(3))
            .normalization(ReturnsNormalization::MeanShare)
            .build()
            .unwrap();

        assert_eq!(game.config().card_count(), 24);
        assert_eq!(state.undealt_cards().len(), 24);
        assert_eq!(game.info().utility_sum, Some(0.0));
        assert_eq!(game.game_type().max_num_players, 4);
    }

    #[test]
    fn test_builder_rejects_uneven_deal() {
        let result = SchafkopfGameBuilder::new().player_count(5).suit_count(1).build();
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_make_observer() {
        let game = SchafkopfGame::default();
        assert!(game
            .make_observer(ObservationType::default(), &ObserverParams::new())
            .is_ok());

        let mut params = ObserverParams::new();
        params.insert("x".into(), "1".into());
        assert!(game.make_observer(ObservationType::default(), &params).is_err());
    }
}
