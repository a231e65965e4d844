//! Card ownership.
//!
//! Every card sits in exactly one location at all times. Cards are never
//! created or destroyed, only relocated.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardLocation {
    /// In a seat's hand.
    Hand(PlayerId),
    /// Not yet dealt.
    Deck,
    /// Played into a trick.
    Trick,
}

impl CardLocation {
    /// Compact numeric code. Hands are `0..player_count`. The deck follows
    /// the hands but never sits below 4, so tables of up to four seats share
    /// the codes Deck=4 and Trick=5.
    #[must_use]
    pub fn code(self, player_count: usize) -> usize {
        let deck = player_count.max(4);
        match self {
            CardLocation::Hand(p) => p.index(),
            CardLocation::Deck => deck,
            CardLocation::Trick => deck + 1,
        }
    }

    /// The holding seat, if the card is in a hand.
    #[must_use]
    pub fn holder(self) -> Option<PlayerId> {
        match self {
            CardLocation::Hand(p) => Some(p),
            CardLocation::Deck | CardLocation::Trick => None,
        }
    }
}

impl std::fmt::Display for CardLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardLocation::Hand(p) => write!(f, "Hand{}", p.0),
            CardLocation::Deck => write!(f, "Deck"),
            CardLocation::Trick => write!(f, "Trick"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_codes() {
        assert_eq!(CardLocation::Hand(PlayerId::new(2)).code(3), 2);
        assert_eq!(CardLocation::Deck.code(3), 4);
        assert_eq!(CardLocation::Trick.code(3), 5);
        assert_eq!(CardLocation::Deck.code(2), 4);
        assert_eq!(CardLocation::Trick.code(4), 5);
        // Larger tables push the deck past the last hand.
        assert_eq!(CardLocation::Hand(PlayerId::new(5)).code(6), 5);
        assert_eq!(CardLocation::Deck.code(6), 6);
        assert_eq!(CardLocation::Trick.code(6), 7);
    }

    #[test]
    fn test_holder() {
        assert_eq!(CardLocation::Hand(PlayerId::new(1)).holder(), Some(PlayerId::new(1)));
        assert_eq!(CardLocation::Deck.holder(), None);
        assert_eq!(CardLocation::Trick.to_string(), "Trick");
    }
}
