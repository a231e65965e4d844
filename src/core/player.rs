//! Seats, actors and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. Seats are numbered clockwise from 0.
//!
//! ## Actor
//!
//! Who moves next: the chance player while cards are dealt, a seat during
//! play, or the terminal marker once the game is over.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    ///
    /// ```
    /// use rust_schafkopf::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(1).next(3), PlayerId::new(2));
    /// assert_eq!(PlayerId::new(2).next(3), PlayerId::new(0));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        self.offset(1, player_count)
    }

    /// The seat `steps` places after this one, wrapping around the table.
    #[must_use]
    pub fn offset(self, steps: usize, player_count: usize) -> Self {
        Self(((self.index() + steps) % player_count) as u8)
    }

    /// Iterate over all seats for a table of `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// The party that makes the next move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// A random deal outcome is pending.
    Chance,
    /// A seated player chooses a card.
    Player(PlayerId),
    /// The game is over; nobody moves.
    Terminal,
}

impl Actor {
    /// The seat, if this actor is a player.
    #[must_use]
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Actor::Player(p) => Some(p),
            Actor::Chance | Actor::Terminal => None,
        }
    }

    #[must_use]
    pub fn is_chance(self) -> bool {
        matches!(self, Actor::Chance)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Actor::Terminal)
    }
}

impl From<PlayerId> for Actor {
    fn from(player: PlayerId) -> Self {
        Actor::Player(player)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Actor::Chance => write!(f, "Chance"),
            Actor::Player(p) => write!(f, "{p}"),
            Actor::Terminal => write!(f, "Terminal"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize all entries to the same value.
///
/// ```
/// use rust_schafkopf::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// points[PlayerId::new(1)] += 11;
/// assert_eq!(points[PlayerId::new(1)], 11);
/// assert_eq!(points.as_slice(), &[0, 11, 0]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default(player_count: usize) -> Self
    where
        T: Default,
    {
        Self::new(player_count, |_| T::default())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Seat-ordered view of the values.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all seats.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T: Clone> PlayerMap<T> {
    /// Copy the values out in seat order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
