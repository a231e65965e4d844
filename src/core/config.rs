//! Game configuration and static metadata.
//!
//! - `GameConfig`: table size, deck size, first leader, payoff normalization
//! - `GameInfo`: bounds a hosting search framework reads once per game
//! - `GameType`: capability flags for the same framework
//!
//! Defaults reproduce the default table: three players sharing one suit of
//! six cards, seat 0 leading the first trick.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::PlayerId;
use crate::cards::{deck_value, MAX_SUITS, RANK_COUNT};

/// Most seats a table supports.
pub const MAX_PLAYERS: usize = 8;

/// How terminal points become payoffs.
///
/// Both variants divide by the deck's total point value and round to three
/// decimals. They differ in the baseline subtracted from each seat's points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnsNormalization {
    /// Subtract half the deck value (integer halving). Zero-sum only for two seats.
    #[default]
    HalfTotal,
    /// Subtract each seat's equal share of the deck value. Zero-sum for any table.
    MeanShare,
}

impl ReturnsNormalization {
    /// Payoff for a seat holding `points` out of `max_points` at a table of `player_count`.
    #[must_use]
    pub fn payoff(self, points: u32, max_points: u32, player_count: usize) -> f64 {
        if max_points == 0 {
            return 0.0;
        }
        let baseline = match self {
            ReturnsNormalization::HalfTotal => f64::from(max_points / 2),
            ReturnsNormalization::MeanShare => f64::from(max_points) / player_count as f64,
        };
        round3((f64::from(points) - baseline) / f64::from(max_points))
    }

    /// Whether payoffs under this rule sum to zero (before rounding).
    #[must_use]
    pub fn is_zero_sum(self, max_points: u32, player_count: usize) -> bool {
        match self {
            ReturnsNormalization::HalfTotal => player_count == 2 && max_points % 2 == 0,
            ReturnsNormalization::MeanShare => true,
        }
    }
}

/// Round to three decimals, half away from zero.
fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

/// Table and deck configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats at the table.
    pub player_count: usize,

    /// Suits in the deck; each suit holds `RANK_COUNT` cards.
    pub suit_count: usize,

    /// Seat that leads the first trick.
    pub starting_seat: PlayerId,

    pub normalization: ReturnsNormalization,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 3,
            suit_count: 1,
            starting_seat: PlayerId::new(0),
            normalization: ReturnsNormalization::HalfTotal,
        }
    }
}

impl GameConfig {
    /// Set the number of seats.
    #[must_use]
    pub fn with_players(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Set the number of suits.
    #[must_use]
    pub fn with_suits(mut self, suit_count: usize) -> Self {
        self.suit_count = suit_count;
        self
    }

    #[must_use]
    pub fn with_starting_seat(mut self, seat: PlayerId) -> Self {
        self.starting_seat = seat;
        self
    }

    #[must_use]
    pub fn with_normalization(mut self, normalization: ReturnsNormalization) -> Self {
        self.normalization = normalization;
        self
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.suit_count * RANK_COUNT
    }

    /// Cards each seat receives.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.card_count() / self.player_count
    }

    /// Sum of all card values.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        deck_value(self.suit_count)
    }

    /// Check the configuration describes a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        if !(2..=MAX_PLAYERS).contains(&self.player_count) {
            return Err(GameError::InvalidConfig(format!(
                "player count must be 2-{MAX_PLAYERS}, got {}",
                self.player_count
            )));
        }
        if !(1..=MAX_SUITS).contains(&self.suit_count) {
            return Err(GameError::InvalidConfig(format!(
                "suit count must be 1-{MAX_SUITS}, got {}",
                self.suit_count
            )));
        }
        if self.card_count() % self.player_count != 0 {
            return Err(GameError::InvalidConfig(format!(
                "{} cards cannot be dealt evenly to {} players",
                self.card_count(),
                self.player_count
            )));
        }
        if self.starting_seat.index() >= self.player_count {
            return Err(GameError::InvalidConfig(format!(
                "starting seat {} is not at a table of {}",
                self.starting_seat.0, self.player_count
            )));
        }
        Ok(())
    }

    /// Static bounds derived from this configuration.
    #[must_use]
    pub fn info(&self) -> GameInfo {
        let cards = self.card_count();
        let max_points = self.max_points();
        GameInfo {
            num_distinct_actions: cards,
            max_chance_outcomes: cards,
            num_players: self.player_count,
            min_utility: -1.0,
            max_utility: 1.0,
            utility_sum: self
                .normalization
                .is_zero_sum(max_points, self.player_count)
                .then_some(0.0),
            max_game_length: 2 * cards,
        }
    }
}

/// Static bounds of a configured game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// One action per card: dealing it or playing it.
    pub num_distinct_actions: usize,
    pub max_chance_outcomes: usize,
    pub num_players: usize,
    pub min_utility: f64,
    pub max_utility: f64,
    /// `Some(0.0)` when payoffs always sum to zero.
    pub utility_sum: Option<f64>,
    /// Deal moves plus play moves.
    pub max_game_length: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dynamics {
    Sequential,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChanceMode {
    ExplicitStochastic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Information {
    ImperfectInformation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Utility {
    ZeroSum,
    GeneralSum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardModel {
    Terminal,
}

/// Capability flags read by a hosting framework.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameType {
    pub short_name: &'static str,
    pub long_name: &'static str,
    pub dynamics: Dynamics,
    pub chance_mode: ChanceMode,
    pub information: Information,
    pub utility: Utility,
    pub reward_model: RewardModel,
    pub min_num_players: usize,
    pub max_num_players: usize,
    pub provides_observation_string: bool,
    pub provides_observation_tensor: bool,
}

impl GameType {
    /// Flags for a configured table.
    #[must_use]
    pub fn for_config(config: &GameConfig) -> Self {
        let utility = if config
            .normalization
            .is_zero_sum(config.max_points(), config.player_count)
        {
            Utility::ZeroSum
        } else {
            Utility::GeneralSum
        };
        Self {
            short_name: "schafkopf",
            long_name: "Schafkopf",
            dynamics: Dynamics::Sequential,
            chance_mode: ChanceMode::ExplicitStochastic,
            information: Information::ImperfectInformation,
            utility,
            reward_model: RewardModel::Terminal,
            min_num_players: config.player_count,
            max_num_players: config.player_count,
            provides_observation_string: true,
            provides_observation_tensor: true,
        }
    }
}
