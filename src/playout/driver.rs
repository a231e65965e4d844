//! Drives a state to terminal.

use log::{debug, error};

use crate::core::{Actor, GameError, GameRng};
use crate::rules::RulesEngine;

use super::policy::PlayoutPolicy;

/// Default step budget. Generous for any supported table.
pub const DEFAULT_MAX_STEPS: usize = 1024;

/// External driver: samples chance, asks the policy for player moves.
#[derive(Clone, Debug)]
pub struct Playout<P> {
    policy: P,
    max_steps: usize,
}

impl<P> Playout<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Cap the number of moves a single run may apply.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Pick the next move for the current actor. `None` at terminal states.
    pub fn next_action<E>(&self, state: &E, rng: &mut GameRng) -> Result<Option<E::Action>, GameError>
    where
        E: RulesEngine,
        P: PlayoutPolicy<E>,
    {
        match state.current_actor() {
            Actor::Terminal => Ok(None),
            Actor::Chance => {
                let outcomes = state.chance_outcomes()?;
                match rng.sample_outcome(&outcomes) {
                    Some(action) => Ok(Some(action)),
                    None => {
                        error!("chance node with an empty outcome distribution");
                        Err(GameError::NoLegalActions(Actor::Chance))
                    }
                }
            }
            actor @ Actor::Player(player) => {
                let actions = state.legal_actions(actor);
                match self.policy.choose(state, player, &actions, rng) {
                    Some(action) => Ok(Some(action)),
                    None => {
                        error!("{player} has no legal actions at a non-terminal state");
                        Err(GameError::NoLegalActions(actor))
                    }
                }
            }
        }
    }

    /// Apply one move. Returns `false` once the state is terminal.
    pub fn step<E>(&self, state: &mut E, rng: &mut GameRng) -> Result<bool, GameError>
    where
        E: RulesEngine,
        P: PlayoutPolicy<E>,
    {
        match self.next_action(state, rng)? {
            Some(action) => {
                state.apply_action(action);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Play `state` to the end and return its payoffs.
    pub fn run<E>(&self, state: &mut E, rng: &mut GameRng) -> Result<Vec<f64>, GameError>
    where
        E: RulesEngine,
        P: PlayoutPolicy<E>,
    {
        let mut steps = 0;
        while self.step(state, rng)? {
            steps += 1;
            if steps > self.max_steps {
                return Err(GameError::StepLimit(self.max_steps));
            }
        }
        debug!("playout finished after {steps} steps");
        Ok(state.returns())
    }

    /// Play a copy of `state` to the end, leaving the original untouched.
    pub fn run_from<E>(&self, state: &E, rng: &mut GameRng) -> Result<Vec<f64>, GameError>
    where
        E: RulesEngine + Clone,
        P: PlayoutPolicy<E>,
    {
        let mut state = state.clone();
        self.run(&mut state, rng)
    }
}

impl<P: Default> Default for Playout<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}
