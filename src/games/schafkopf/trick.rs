//! One round of play: every seat contributes one card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::PlayerId;

/// An ordered record of the cards played in one round.
///
/// The leader plays first and the remaining seats follow clockwise. The led
/// suit is fixed by the first card. Legality is not checked here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trick {
    leader: PlayerId,
    player_count: u8,
    led_suit: Option<Suit>,
    /// Cards in play order. Inline storage covers tables up to four seats.
    cards: SmallVec<[Card; 4]>,
}

impl Trick {
    /// Open an empty trick led by `leader`.
    #[must_use]
    pub fn new(leader: PlayerId, player_count: usize) -> Self {
        Self {
            leader,
            player_count: player_count as u8,
            led_suit: None,
            cards: SmallVec::new(),
        }
    }

    /// Append a card. The first card fixes the led suit.
    pub fn play(&mut self, card: Card) {
        debug_assert!(!self.is_closed(), "trick already holds a card from every seat");
        if self.cards.is_empty() {
            self.led_suit = Some(card.suit());
        }
        self.cards.push(card);
    }

    #[must_use]
    pub fn leader(&self) -> PlayerId {
        self.leader
    }

    /// Suit of the first card, `None` before any card is played.
    #[must_use]
    pub fn led_suit(&self) -> Option<Suit> {
        self.led_suit
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn first_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.cards.len()
    }

    /// Every seat has played.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.cards.len() == usize::from(self.player_count)
    }

    /// Seat that plays at position `pos`, counted from the leader.
    #[must_use]
    pub fn player_at_position(&self, pos: usize) -> PlayerId {
        self.leader.offset(pos, usize::from(self.player_count))
    }

    /// Whether this trick can belong to a table of `player_count` seats
    /// dealing `card_count` cards.
    pub(crate) fn fits(&self, player_count: usize, card_count: usize) -> bool {
        usize::from(self.player_count) == player_count
            && self.leader.index() < player_count
            && self.cards.len() <= player_count
            && self.cards.iter().all(|c| c.id() < card_count)
            && self.led_suit == self.first_card().map(|c| c.suit())
    }

    /// `(seat, card)` pairs in play order.
    pub fn plays(&self) -> impl Iterator<Item = (PlayerId, Card)> + '_ {
        self.cards
            .iter()
            .enumerate()
            .map(|(pos, &card)| (self.player_at_position(pos), card))
    }

    /// Sum of the point values of the cards played so far.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.cards.iter().map(|c| c.value()).sum()
    }

    /// Seat that takes a closed trick, `None` while it is open.
    ///
    /// A card beats the current best only when it shares the best card's suit
    /// and outranks it. There is no trump: off-suit cards never win.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_closed() {
            return None;
        }
        let mut plays = self.plays();
        let (mut winner, mut best) = plays.next()?;
        for (seat, card) in plays {
            if card.suit() == best.suit() && card.rank() > best.rank() {
                winner = seat;
                best = card;
            }
        }
        Some(winner)
    }
}

impl std::fmt::Display for Trick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "leader:{}; ", self.leader.0)?;
        match self.led_suit {
            Some(suit) => write!(f, "led_suit:{suit}; ")?,
            None => write!(f, "led_suit:-; ")?,
        }
        let ids: Vec<usize> = self.cards.iter().map(|c| c.id()).collect();
        write!(f, "played:{ids:?}; points:{}", self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    #[test]
    fn test_fits_table() {
        let mut trick = Trick::new(PlayerId::new(2), 3);
        trick.play(Card(4));
        assert!(trick.fits(3, 6));
        assert!(!trick.fits(4, 6));
        assert!(!trick.fits(3, 4));
        assert!(!Trick::new(PlayerId::new(3), 3).fits(3, 6));
    }

    #[test]
    fn test_first_card_sets_led_suit() {
        let mut trick = Trick::new(PlayerId::new(1), 3);
        assert_eq!(trick.led_suit(), None);
        assert_eq!(trick.first_card(), None);

        trick.play(card(Suit::Herz, Rank::Neun));
        trick.play(card(Suit::Gras, Rank::Ober));

        assert_eq!(trick.led_suit(), Some(Suit::Herz));
        assert_eq!(trick.first_card(), Some(card(Suit::Herz, Rank::Neun)));
        assert_eq!(trick.cards_played(), 2);
        assert!(!trick.is_closed());
    }

    #[test]
    fn test_positions_are_leader_relative() {
        let trick = Trick::new(PlayerId::new(2), 3);
        assert_eq!(trick.player_at_position(0), PlayerId::new(2));
        assert_eq!(trick.player_at_position(1), PlayerId::new(0));
        assert_eq!(trick.player_at_position(2), PlayerId::new(1));
    }

    #[test]
    fn test_points() {
        let mut trick = Trick::new(PlayerId::new(0), 3);
        trick.play(card(Suit::Schellen, Rank::Ass));
        trick.play(card(Suit::Schellen, Rank::Zehn));
        trick.play(card(Suit::Schellen, Rank::Neun));
        assert_eq!(trick.points(), 21);
    }

    #[test]
    fn test_open_trick_has_no_winner() {
        let mut trick = Trick::new(PlayerId::new(0), 3);
        trick.play(card(Suit::Schellen, Rank::Ass));
        assert_eq!(trick.winner(), None);
    }

    #[test]
    fn test_highest_of_led_suit_wins() {
        let mut trick = Trick::new(PlayerId::new(1), 3);
        trick.play(card(Suit::Herz, Rank::Zehn)); // seat 1
        trick.play(card(Suit::Herz, Rank::Unter)); // seat 2
        trick.play(card(Suit::Herz, Rank::Koenig)); // seat 0
        assert_eq!(trick.winner(), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_off_suit_never_wins() {
        let mut trick = Trick::new(PlayerId::new(0), 3);
        trick.play(card(Suit::Herz, Rank::Neun)); // seat 0
        trick.play(card(Suit::Eichel, Rank::Ober)); // seat 1
        trick.play(card(Suit::Gras, Rank::Ass)); // seat 2
        assert_eq!(trick.winner(), Some(PlayerId::new(0)));
        assert_eq!(trick.points(), 14);
    }

    #[test]
    fn test_display() {
        let mut trick = Trick::new(PlayerId::new(0), 2);
        trick.play(Card(3));
        assert_eq!(trick.to_string(), "leader:0; led_suit:Schellen; played:[3]; points:11");
    }
}
