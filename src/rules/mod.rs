//! Capability set for game implementations.
//!
//! Games implement `RulesEngine` to expose:
//! - Current actor and legal actions
//! - Chance outcome distributions
//! - State transitions and terminal payoffs
//!
//! Drivers and search algorithms call into `RulesEngine` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::RulesEngine;
