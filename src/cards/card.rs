//! Card identifiers and their derived attributes.
//!
//! A card is an integer in `[0, card_count)`. Cards are ordered first by
//! suit, then by rank: `suit = id / RANK_COUNT`, `rank = id % RANK_COUNT`.
//! Every attribute is a pure function of the identifier.

use serde::{Deserialize, Serialize};

/// Number of ranks per suit.
pub const RANK_COUNT: usize = 6;

/// Largest number of suits a deck may contain.
pub const MAX_SUITS: usize = 4;

/// Card suit. Suits are only compared for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Schellen = 0,
    Herz = 1,
    Gras = 2,
    Eichel = 3,
}

impl Suit {
    pub const ALL: [Suit; MAX_SUITS] = [Suit::Schellen, Suit::Herz, Suit::Gras, Suit::Eichel];

    /// Suit from its index. Callers guarantee `index < MAX_SUITS`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Schellen => "Schellen",
            Suit::Herz => "Herz",
            Suit::Gras => "Gras",
            Suit::Eichel => "Eichel",
        };
        f.write_str(name)
    }
}

/// Card rank, declared in ascending strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Neun = 0,
    Koenig = 1,
    Zehn = 2,
    Ass = 3,
    Unter = 4,
    Ober = 5,
}

impl Rank {
    pub const ALL: [Rank; RANK_COUNT] = [
        Rank::Neun,
        Rank::Koenig,
        Rank::Zehn,
        Rank::Ass,
        Rank::Unter,
        Rank::Ober,
    ];

    /// Rank from its index. Callers guarantee `index < RANK_COUNT`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index]
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Scoring weight of the rank.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Neun => 0,
            Rank::Koenig => 4,
            Rank::Zehn => 10,
            Rank::Ass => 11,
            Rank::Unter => 2,
            Rank::Ober => 3,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rank::Neun => "Neun",
            Rank::Koenig => "König",
            Rank::Zehn => "Zehn",
            Rank::Ass => "Ass",
            Rank::Unter => "Unter",
            Rank::Ober => "Ober",
        };
        f.write_str(name)
    }
}

/// Card identifier.
///
/// ```
/// use rust_schafkopf::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Suit::Herz, Rank::Ass);
/// assert_eq!(card.id(), 9);
/// assert_eq!(card.suit(), Suit::Herz);
/// assert_eq!(card.rank(), Rank::Ass);
/// assert_eq!(card.value(), 11);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card(pub u8);

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self((suit.index() * RANK_COUNT + rank.index()) as u8)
    }

    /// Raw identifier, also the action id of playing or dealing this card.
    #[must_use]
    pub const fn id(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::from_index(self.id() / RANK_COUNT)
    }

    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::from_index(self.id() % RANK_COUNT)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.rank().value()
    }

    /// All cards of a deck with `suit_count` suits, in identifier order.
    pub fn deck(suit_count: usize) -> impl Iterator<Item = Card> {
        (0..(suit_count * RANK_COUNT) as u8).map(Card)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.suit(), self.rank())
    }
}

/// Sum of the scoring weights of a full deck with `suit_count` suits.
#[must_use]
pub fn deck_value(suit_count: usize) -> u32 {
    Card::deck(suit_count).map(Card::value).sum()
}
