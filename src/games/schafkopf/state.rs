//! Schafkopf game state: deal, play, game over.
//!
//! ## Phases
//!
//! - **Deal**: chance deals every card, round-robin by remaining deck size
//! - **Play**: seats play one card each per trick, following the led suit if able
//! - **GameOver**: all cards played, payoffs fixed
//!
//! The state is the only mutable entity. It is a plain value: search code
//! that explores several branches clones it. Trick and move history live in
//! `im` vectors so those clones are cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::trick::Trick;
use crate::cards::{Card, CardLocation};
use crate::core::{Actor, GameConfig, GameError, PlayerId, PlayerMap};
use crate::rules::RulesEngine;

/// Game phase. Transitions are linear: Deal → Play → GameOver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Deal,
    Play,
    GameOver,
}

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub actor: Actor,
    pub card: Card,
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchafkopfState {
    config: GameConfig,
    phase: Phase,

    /// Owner of every card, indexed by card id.
    locations: Vec<CardLocation>,

    cards_played: usize,

    /// Tricks in play order; only the last one may be open.
    tricks: Vector<Trick>,

    /// Points taken per seat. Only ever increases.
    points: PlayerMap<u32>,

    /// Sum of all card values.
    max_points: u32,

    next_player: PlayerId,

    /// Payoffs; set once, on the transition to GameOver.
    returns: PlayerMap<f64>,

    history: Vector<HistoryEntry>,
}

impl SchafkopfState {
    /// Fresh state in the deal phase with every card in the deck.
    ///
    /// `config` is expected to have passed `GameConfig::validate`.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {config:?}");
        let player_count = config.player_count;

        Self {
            config,
            phase: Phase::Deal,
            locations: vec![CardLocation::Deck; config.card_count()],
            cards_played: 0,
            tricks: Vector::new(),
            points: PlayerMap::with_value(player_count, 0),
            max_points: config.max_points(),
            next_player: config.starting_seat,
            returns: PlayerMap::with_value(player_count, 0.0),
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.locations.len()
    }

    /// Current owner of `card`.
    #[must_use]
    pub fn location(&self, card: Card) -> CardLocation {
        self.locations[card.id()]
    }

    /// Owner of every card, indexed by card id.
    #[must_use]
    pub fn locations(&self) -> &[CardLocation] {
        &self.locations
    }

    /// Cards at `location`, ascending.
    #[must_use]
    pub fn cards_at(&self, location: CardLocation) -> Vec<Card> {
        self.locations
            .iter()
            .enumerate()
            .filter(|&(_, &loc)| loc == location)
            .map(|(id, _)| Card(id as u8))
            .collect()
    }

    /// Cards in `player`'s hand, ascending.
    #[must_use]
    pub fn player_cards(&self, player: PlayerId) -> Vec<Card> {
        self.cards_at(CardLocation::Hand(player))
    }

    /// Cards still in the deck, ascending.
    #[must_use]
    pub fn undealt_cards(&self) -> Vec<Card> {
        self.cards_at(CardLocation::Deck)
    }

    #[must_use]
    pub fn cards_played(&self) -> usize {
        self.cards_played
    }

    #[must_use]
    pub fn tricks(&self) -> &Vector<Trick> {
        &self.tricks
    }

    /// The most recent trick, open or closed.
    #[must_use]
    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.back()
    }

    /// The trick before the current one.
    #[must_use]
    pub fn previous_trick(&self) -> Option<&Trick> {
        self.tricks.len().checked_sub(2).and_then(|i| self.tricks.get(i))
    }

    /// Points taken by `player` so far.
    #[must_use]
    pub fn points(&self, player: PlayerId) -> u32 {
        self.points[player]
    }

    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.max_points
    }

    /// Seat that plays next during the play phase.
    #[must_use]
    pub fn next_player(&self) -> PlayerId {
        self.next_player
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<HistoryEntry> {
        &self.history
    }

    // === Snapshots ===

    /// Serialize the full state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GameError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a state written by `to_bytes`.
    ///
    /// The decoded state is checked for internal consistency, so a blob that
    /// decodes but describes an impossible table is rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GameError> {
        let state: Self = bincode::deserialize(bytes)?;
        state.check_consistent()?;
        Ok(state)
    }

    fn check_consistent(&self) -> Result<(), GameError> {
        self.config.validate()?;
        let seats = self.config.player_count;
        let cards = self.config.card_count();

        let corrupt = |msg: String| -> Result<(), GameError> {
            Err(GameError::Snapshot(Box::new(bincode::ErrorKind::Custom(msg))))
        };

        if self.locations.len() != cards {
            let found = self.locations.len();
            return corrupt(format!("{found} card locations for a deck of {cards}"));
        }
        if self
            .locations
            .iter()
            .any(|loc| loc.holder().is_some_and(|p| p.index() >= seats))
        {
            return corrupt(format!("card held by a seat outside a table of {seats}"));
        }
        if self.points.player_count() != seats || self.returns.player_count() != seats {
            return corrupt(format!("per-seat tables do not match {seats} seats"));
        }
        if self.next_player.index() >= seats {
            return corrupt(format!("next player {} outside a table of {seats}", self.next_player));
        }
        if self.max_points != self.config.max_points() {
            return corrupt(format!(
                "max points {} for a deck worth {}",
                self.max_points,
                self.config.max_points()
            ));
        }
        if self.cards_played > cards {
            return corrupt(format!("{} cards played from a deck of {cards}", self.cards_played));
        }

        let on_table = self.cards_at(CardLocation::Trick).len();
        let in_tricks: usize = self.tricks.iter().map(Trick::cards_played).sum();
        if on_table != self.cards_played || in_tricks != self.cards_played {
            return corrupt(format!(
                "{} cards played but {on_table} on the table and {in_tricks} in tricks",
                self.cards_played
            ));
        }
        if !self.tricks.iter().all(|t| t.fits(seats, cards))
            || self
                .tricks
                .iter()
                .flat_map(Trick::cards)
                .any(|c| self.locations[c.id()] != CardLocation::Trick)
        {
            return corrupt("trick does not fit the table".to_string());
        }

        let undealt = self.cards_at(CardLocation::Deck).len();
        let phase_ok = match self.phase {
            Phase::Deal => self.cards_played == 0,
            Phase::Play => undealt == 0 && self.cards_played < cards,
            Phase::GameOver => self.cards_played == cards,
        };
        if !phase_ok {
            let (phase, played) = (self.phase, self.cards_played);
            return corrupt(format!("phase {phase:?} with {played} cards played"));
        }
        Ok(())
    }

    // === Transitions ===

    fn starts_new_trick(&self) -> bool {
        self.cards_played % self.config.player_count == 0
    }

    fn play_actions(&self, player: PlayerId) -> Vec<Card> {
        let hand = self.player_cards(player);
        if self.starts_new_trick() {
            return hand;
        }

        let led_suit = self.current_trick().and_then(Trick::led_suit);
        let following: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| Some(c.suit()) == led_suit)
            .collect();
        if following.is_empty() {
            hand
        } else {
            following
        }
    }

    fn apply_deal_action(&mut self, card: Card) {
        debug_assert_eq!(self.location(card), CardLocation::Deck, "{card} already dealt");

        let remaining = self.locations.iter().filter(|&&l| l == CardLocation::Deck).count();
        let receiver = PlayerId::new((remaining % self.config.player_count) as u8);
        self.locations[card.id()] = CardLocation::Hand(receiver);
        log::trace!("dealt card {} to seat {}", card.id(), receiver.0);

        if remaining == 1 {
            self.phase = Phase::Play;
            self.next_player = self.config.starting_seat;
            log::debug!("deal complete; seat {} leads", self.next_player.0);
        }
    }

    fn apply_play_action(&mut self, card: Card) {
        let player = self.next_player;
        let player_count = self.config.player_count;
        debug_assert!(
            self.play_actions(player).contains(&card),
            "{card} is not a legal play for seat {}",
            player.0
        );

        let opens_trick = self.starts_new_trick();
        if opens_trick {
            self.tricks.push_back(Trick::new(player, player_count));
        }
        if let Some(trick) = self.tricks.back_mut() {
            trick.play(card);
        }
        self.locations[card.id()] = CardLocation::Trick;
        self.cards_played += 1;
        log::trace!("seat {} played card {}", player.0, card.id());

        if self.starts_new_trick() {
            self.resolve_trick();
        } else {
            self.next_player = player.next(player_count);
        }
    }

    /// Score the trick that just closed and hand the lead to its winner.
    fn resolve_trick(&mut self) {
        let resolved = self
            .tricks
            .back()
            .and_then(|t| t.winner().map(|w| (w, t.points())));
        let Some((winner, trick_points)) = resolved else {
            return;
        };

        self.points[winner] += trick_points;
        log::debug!(
            "trick {} won by seat {} for {} points",
            self.tricks.len(),
            winner.0,
            trick_points
        );

        if self.cards_played == self.card_count() {
            self.finish();
        } else {
            self.next_player = winner;
        }
    }

    fn finish(&mut self) {
        let player_count = self.config.player_count;
        let normalization = self.config.normalization;
        let max_points = self.max_points;
        let points = &self.points;

        self.returns = PlayerMap::new(player_count, |p| {
            normalization.payoff(points[p], max_points, player_count)
        });
        self.phase = Phase::GameOver;
        log::debug!(
            "game over; points {:?}, returns {:?}",
            self.points.as_slice(),
            self.returns.as_slice()
        );
    }
}

impl RulesEngine for SchafkopfState {
    type Action = Card;

    fn player_count(&self) -> usize {
        self.config.player_count
    }

    fn current_actor(&self) -> Actor {
        match self.phase {
            Phase::Deal => Actor::Chance,
            Phase::Play => Actor::Player(self.next_player),
            Phase::GameOver => Actor::Terminal,
        }
    }

    fn legal_actions(&self, actor: Actor) -> Vec<Card> {
        match (self.phase, actor) {
            (Phase::Deal, _) => self.undealt_cards(),
            (Phase::Play, Actor::Player(player)) => self.play_actions(player),
            (Phase::Play, _) | (Phase::GameOver, _) => Vec::new(),
        }
    }

    fn chance_outcomes(&self) -> Result<Vec<(Card, f64)>, GameError> {
        if self.phase != Phase::Deal {
            return Err(GameError::NotChanceNode);
        }

        let cards = self.undealt_cards();
        if cards.is_empty() {
            log::error!("chance outcomes requested with an empty deck");
            return Err(GameError::ExhaustedDeck);
        }

        let p = 1.0 / cards.len() as f64;
        Ok(cards.into_iter().map(|c| (c, p)).collect())
    }

    fn apply_action(&mut self, card: Card) {
        let actor = self.current_actor();
        match self.phase {
            Phase::Deal => self.apply_deal_action(card),
            Phase::Play => self.apply_play_action(card),
            Phase::GameOver => {
                debug_assert!(false, "action applied to a finished game");
                return;
            }
        }
        self.history.push_back(HistoryEntry { actor, card });
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::GameOver
    }

    fn returns(&self) -> Vec<f64> {
        self.returns.to_vec()
    }

    fn action_to_string(&self, actor: Actor, card: Card) -> String {
        match actor {
            Actor::Chance => format!("D{}", card.id()),
            Actor::Player(p) => format!("P{}:A{}", p.0, card.id()),
            Actor::Terminal => format!("A{}", card.id()),
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for SchafkopfState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "phase = {:?}", self.phase)?;
        writeln!(f, "cards_played = {}", self.cards_played)?;
        writeln!(f, "points = {:?}", self.points.as_slice())?;
        writeln!(f, "next_player = {}", self.next_player.0)?;
        writeln!(f, "num_tricks = {}", self.tricks.len())?;
        if let Some(trick) = self.current_trick() {
            writeln!(f, "cur trick = {trick}")?;
        }
        Ok(())
    }
}
