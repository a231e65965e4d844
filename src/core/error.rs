//! Error taxonomy for the engine.
//!
//! Illegal actions are not represented here: applying a card outside the
//! legal set is the caller's contract to avoid.

use super::Actor;

/// Errors surfaced by the engine.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Chance outcomes were requested while no card is left to deal.
    #[error("no cards left to deal")]
    ExhaustedDeck,

    /// Chance outcomes were requested outside the deal phase.
    #[error("chance outcomes requested at a non-chance node")]
    NotChanceNode,

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    /// The observer accepts no parameters.
    #[error("observation parameters not supported; passed {0:?}")]
    UnsupportedObserverParams(Vec<String>),

    /// A playout reached a non-terminal state where nobody can move.
    #[error("{0} has no legal actions at a non-terminal state")]
    NoLegalActions(Actor),

    /// A playout ran past its step budget without reaching a terminal state.
    #[error("playout exceeded {0} steps")]
    StepLimit(usize),

    #[error("state snapshot failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl GameError {
    /// Invariant violations that should be unreachable under correct driver usage.
    #[must_use]
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            GameError::ExhaustedDeck | GameError::NotChanceNode | GameError::NoLegalActions(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(GameError::ExhaustedDeck.to_string(), "no cards left to deal");
        assert_eq!(
            GameError::UnsupportedObserverParams(vec!["mask".into()]).to_string(),
            "observation parameters not supported; passed [\"mask\"]"
        );
        assert_eq!(
            GameError::InvalidConfig("7 cards for 3 players".into()).to_string(),
            "invalid game configuration: 7 cards for 3 players"
        );
    }

    #[test]
    fn test_invariant_classification() {
        assert!(GameError::ExhaustedDeck.is_invariant_violation());
        assert!(GameError::NotChanceNode.is_invariant_violation());
        assert!(GameError::NoLegalActions(Actor::Chance).is_invariant_violation());
        assert!(!GameError::StepLimit(12).is_invariant_violation());
        assert!(!GameError::InvalidConfig(String::new()).is_invariant_violation());
    }
}
