//! Per-seat feature views of game state.
//!
//! ## Overview
//!
//! - **Tensor**: `EncodedState` and `TensorLayout`, a flat buffer with named segments
//! - **Encoding**: `StateEncoder` trait for owned, read-only encodings
//! - **Observer**: `SchafkopfObserver`, a reusable scratch buffer refreshed per request
//!
//! ## Usage
//!
//! ```
//! use rust_schafkopf::games::schafkopf::SchafkopfGame;
//! use rust_schafkopf::observation::{ObservationType, ObserverParams, PLAYER};
//! use rust_schafkopf::core::PlayerId;
//!
//! let game = SchafkopfGame::default();
//! let state = game.new_initial_state();
//! let mut observer = game
//!     .make_observer(ObservationType::default(), &ObserverParams::new())
//!     .unwrap();
//!
//! observer.refresh(&state, PlayerId::new(2)).unwrap();
//! assert_eq!(observer.segment(PLAYER).unwrap(), &[0.0, 0.0, 1.0]);
//! ```

pub mod encoder;
pub mod observer;
pub mod tensor;

pub use encoder::StateEncoder;
pub use observer::{
    ObservationType, ObserverParams, PrivateInfoType, SchafkopfObserver, CURRENT_TRICK,
    CURRENT_TRICK_LEADER, PLAYER, PREVIOUS_TRICK, PREVIOUS_TRICK_LEADER, PRIVATE_CARDS,
    SOLO_PLAYER,
};
pub use tensor::{EncodedState, Segment, TensorLayout};
