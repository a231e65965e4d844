//! Card model.
//!
//! - `Card`: integer identifier with derived suit, rank and point value
//! - `CardLocation`: the hand, deck or trick pile currently holding a card

pub mod card;
pub mod location;

pub use card::{deck_value, Card, Rank, Suit, MAX_SUITS, RANK_COUNT};
pub use location::CardLocation;
