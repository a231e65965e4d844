//! Core engine types: seats, actors, configuration, errors, RNG.
//!
//! Nothing here knows the rules of a particular game; games and the observer
//! build on these types.

pub mod player;
pub mod config;
pub mod error;
pub mod rng;

pub use player::{Actor, PlayerId, PlayerMap};
pub use config::{
    ChanceMode, Dynamics, GameConfig, GameInfo, GameType, Information, ReturnsNormalization,
    RewardModel, Utility, MAX_PLAYERS,
};
pub use error::GameError;
pub use rng::{GameRng, GameRngState};
