//! # rust-schafkopf
//!
//! A deterministic Schafkopf trick-taking state machine for game-tree search.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: The state never draws random numbers. Chance nodes
//!    expose their outcome distribution and an external driver samples it.
//!
//! 2. **N-Player First**: Every API takes the table size from `GameConfig`.
//!    Nothing assumes three seats except the defaults.
//!
//! 3. **Cheap Copies**: Tricks and history live in `im-rs` vectors so search
//!    can clone states freely.
//!
//! ## Modules
//!
//! - `core`: Players, actors, configuration, errors, RNG
//! - `cards`: Card identifiers and locations
//! - `rules`: `RulesEngine` capability set for search algorithms
//! - `games`: The Schafkopf state machine and game factory
//! - `observation`: Per-seat feature tensors and observation strings
//! - `playout`: Seeded drivers that play a state to the end

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod observation;
pub mod playout;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    Actor, PlayerId, PlayerMap,
    GameConfig, GameInfo, GameType, ReturnsNormalization,
    GameError,
    GameRng, GameRngState,
};

pub use crate::cards::{Card, CardLocation, Rank, Suit};

pub use crate::rules::RulesEngine;

pub use crate::games::schafkopf::{
    HistoryEntry, Phase, SchafkopfGame, SchafkopfGameBuilder, SchafkopfState, Trick,
};

pub use crate::observation::{
    EncodedState, ObservationType, ObserverParams, PrivateInfoType, SchafkopfObserver,
    StateEncoder,
};

pub use crate::playout::{FirstLegalPolicy, Playout, PlayoutPolicy, UniformPolicy};
