//! Capability set a game state exposes to search algorithms.
//!
//! A generic search or solver depends only on this trait:
//! - Who moves next, and what they may do
//! - The outcome distribution at chance nodes
//! - How an action changes the state
//! - Terminal detection and payoffs

use crate::core::{Actor, GameError, PlayerId};

/// Sequential game state with explicit chance nodes.
///
/// ## Implementation Notes
///
/// - `legal_actions`: ascending, deterministic order; empty at terminal states
/// - `apply_action`: must be deterministic; does not re-validate legality
/// - `returns`: one payoff per seat, meaningful once `is_terminal` holds
pub trait RulesEngine {
    /// Action identifier.
    type Action: Copy + Eq + std::fmt::Debug;

    /// Number of seats.
    fn player_count(&self) -> usize;

    /// Who moves next.
    fn current_actor(&self) -> Actor;

    /// Legal actions for `actor`, in ascending order.
    ///
    /// At chance nodes this is the support of `chance_outcomes`.
    fn legal_actions(&self, actor: Actor) -> Vec<Self::Action>;

    /// Outcome distribution at a chance node.
    ///
    /// Errors when the state is not a chance node or has nothing left to draw.
    fn chance_outcomes(&self) -> Result<Vec<(Self::Action, f64)>, GameError>;

    /// Apply an action for the current actor.
    ///
    /// The action must come from `legal_actions` or `chance_outcomes`.
    fn apply_action(&mut self, action: Self::Action);

    fn is_terminal(&self) -> bool;

    /// Per-seat payoffs.
    fn returns(&self) -> Vec<f64>;

    /// Human-readable action label; distinguishes chance from player moves.
    fn action_to_string(&self, actor: Actor, action: Self::Action) -> String;

    /// Debug rendering of the full internal state.
    fn describe(&self) -> String;

    // === Convenience Methods ===

    fn is_chance_node(&self) -> bool {
        self.current_actor().is_chance()
    }

    /// The seat to move, if a player is to move.
    fn current_player(&self) -> Option<PlayerId> {
        self.current_actor().player()
    }

    /// Legal actions of whoever moves next.
    fn current_legal_actions(&self) -> Vec<Self::Action> {
        self.legal_actions(self.current_actor())
    }
}
