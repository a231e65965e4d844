//! State encoding for learning and search.
//!
//! Transforms a game state into a flat tensor from one seat's perspective.

use crate::core::{GameError, PlayerId};

use super::tensor::EncodedState;

/// Encodes game state into tensors.
///
/// Each encoder defines:
/// - How to convert state to a tensor from a seat's perspective
/// - The shape of the output tensor
/// - The size of the action space
pub trait StateEncoder: Send + Sync {
    /// State type this encoder reads.
    type State;

    /// Encode the state from a seat's perspective without touching any shared buffer.
    ///
    /// Fails when the state or seat does not fit this encoder's table.
    fn encode(&self, state: &Self::State, perspective: PlayerId) -> Result<EncodedState, GameError>;

    fn output_shape(&self) -> Vec<usize>;

    /// Length of the policy output vector.
    fn action_space_size(&self) -> usize;

    fn player_count(&self) -> usize;
}
