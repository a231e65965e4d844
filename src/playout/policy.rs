//! Move selection for playouts.
//!
//! Policies only pick among player moves. Chance moves are always sampled
//! from the state's own outcome distribution by the driver.

use crate::core::{GameRng, PlayerId};
use crate::rules::RulesEngine;

/// Chooses a move for the seat to act.
pub trait PlayoutPolicy<E: RulesEngine>: Send + Sync {
    /// Pick one of `actions`. `None` only when `actions` is empty.
    fn choose(
        &self,
        state: &E,
        player: PlayerId,
        actions: &[E::Action],
        rng: &mut GameRng,
    ) -> Option<E::Action>;
}

/// Uniformly random legal move.
#[derive(Clone, Debug, Default)]
pub struct UniformPolicy;

impl<E: RulesEngine> PlayoutPolicy<E> for UniformPolicy {
    fn choose(
        &self,
        _state: &E,
        _player: PlayerId,
        actions: &[E::Action],
        rng: &mut GameRng,
    ) -> Option<E::Action> {
        rng.choose(actions).copied()
    }
}

/// Always the lowest legal move. Consumes no randomness.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalPolicy;

impl<E: RulesEngine> PlayoutPolicy<E> for FirstLegalPolicy {
    fn choose(
        &self,
        _state: &E,
        _player: PlayerId,
        actions: &[E::Action],
        _rng: &mut GameRng,
    ) -> Option<E::Action> {
        actions.first().copied()
    }
}
