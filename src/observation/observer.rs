//! Per-seat feature view of a Schafkopf state.
//!
//! The observer owns one flat `f32` buffer split into fixed segments:
//!
//! | segment | shape | contents |
//! |---|---|---|
//! | `player` | seats | one-hot of the observing seat |
//! | `private_cards` | seats × cards | cards held by each visible hand |
//! | `solo_player` | seats | reserved; seat 0 is always marked |
//! | `current_trick_leader` | seats | one-hot |
//! | `current_trick` | seats × cards | row = play position, column = card |
//! | `previous_trick_leader` | seats | one-hot |
//! | `previous_trick` | seats × cards | same layout for the trick before |
//!
//! `refresh` rewrites the whole buffer from a state snapshot; the observer
//! keeps nothing else between calls. A state from a table of a different
//! size is rejected before anything is written.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::encoder::StateEncoder;
use super::tensor::{EncodedState, Segment, TensorLayout};
use crate::cards::CardLocation;
use crate::core::{GameConfig, GameError, PlayerId};
use crate::games::schafkopf::{SchafkopfState, Trick};

pub const PLAYER: &str = "player";
pub const PRIVATE_CARDS: &str = "private_cards";
pub const SOLO_PLAYER: &str = "solo_player";
pub const CURRENT_TRICK_LEADER: &str = "current_trick_leader";
pub const CURRENT_TRICK: &str = "current_trick";
pub const PREVIOUS_TRICK_LEADER: &str = "previous_trick_leader";
pub const PREVIOUS_TRICK: &str = "previous_trick";

/// Observer construction parameters. None are recognised.
pub type ObserverParams = BTreeMap<String, String>;

/// Whose hands the `private_cards` segment reveals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrivateInfoType {
    /// Every seat's hand.
    #[default]
    AllPlayers,
    /// Only the observing seat's hand.
    SinglePlayer,
    /// No hands.
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObservationType {
    pub private_info: PrivateInfoType,
}

impl ObservationType {
    /// Observation that hides opponents' hands.
    #[must_use]
    pub fn single_player() -> Self {
        Self {
            private_info: PrivateInfoType::SinglePlayer,
        }
    }

    /// Whether a card at `location` is shown to `player`.
    fn reveals(self, location: CardLocation, player: PlayerId) -> bool {
        match (self.private_info, location) {
            (_, CardLocation::Trick) => true,
            (PrivateInfoType::AllPlayers, _) => true,
            (PrivateInfoType::SinglePlayer, CardLocation::Hand(holder)) => holder == player,
            (PrivateInfoType::SinglePlayer, CardLocation::Deck) | (PrivateInfoType::None, _) => {
                false
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Segments {
    player: Segment,
    private_cards: Segment,
    solo_player: Segment,
    current_trick_leader: Segment,
    current_trick: Segment,
    previous_trick_leader: Segment,
    previous_trick: Segment,
}

/// Feature view of a `SchafkopfState` from one seat.
#[derive(Clone, Debug)]
pub struct SchafkopfObserver {
    obs_type: ObservationType,
    player_count: usize,
    card_count: usize,
    layout: TensorLayout,
    segments: Segments,
    tensor: Vec<f32>,
}

impl SchafkopfObserver {
    /// Allocate an observer for tables described by `config`.
    ///
    /// Any entry in `params` is rejected before a buffer is built.
    pub fn new(
        config: &GameConfig,
        obs_type: ObservationType,
        params: &ObserverParams,
    ) -> Result<Self, GameError> {
        if !params.is_empty() {
            return Err(GameError::UnsupportedObserverParams(
                params.keys().cloned().collect(),
            ));
        }

        let seats = config.player_count;
        let cards = config.card_count();

        let mut layout = TensorLayout::default();
        let segments = Segments {
            player: layout.push(PLAYER, &[seats]),
            private_cards: layout.push(PRIVATE_CARDS, &[seats, cards]),
            solo_player: layout.push(SOLO_PLAYER, &[seats]),
            current_trick_leader: layout.push(CURRENT_TRICK_LEADER, &[seats]),
            current_trick: layout.push(CURRENT_TRICK, &[seats, cards]),
            previous_trick_leader: layout.push(PREVIOUS_TRICK_LEADER, &[seats]),
            previous_trick: layout.push(PREVIOUS_TRICK, &[seats, cards]),
        };
        let tensor = vec![0.0; layout.size()];

        Ok(Self {
            obs_type,
            player_count: seats,
            card_count: cards,
            layout,
            segments,
            tensor,
        })
    }

    #[must_use]
    pub fn observation_type(&self) -> ObservationType {
        self.obs_type
    }

    /// The whole flat buffer.
    #[must_use]
    pub fn tensor(&self) -> &[f32] {
        &self.tensor
    }

    #[must_use]
    pub fn layout(&self) -> &TensorLayout {
        &self.layout
    }

    /// Named view into the buffer.
    #[must_use]
    pub fn segment(&self, name: &str) -> Option<&[f32]> {
        self.layout.get(name).map(|s| s.view(&self.tensor))
    }

    /// One row of a 2-D segment.
    #[must_use]
    pub fn segment_row(&self, name: &str, row: usize) -> Option<&[f32]> {
        let segment = self.layout.get(name)?;
        if row >= segment.rows() {
            return None;
        }
        let start = segment.offset + row * segment.row_len();
        self.tensor.get(start..start + segment.row_len())
    }

    /// Rewrite the buffer to reflect `state` as seen by `player`.
    ///
    /// On error the buffer keeps its previous contents.
    pub fn refresh(&mut self, state: &SchafkopfState, player: PlayerId) -> Result<(), GameError> {
        self.check_table(state, player)?;
        self.tensor.fill(0.0);
        write_features(&self.segments, self.obs_type, &mut self.tensor, state, player);
        Ok(())
    }

    /// The same information as the buffer, as text.
    pub fn describe(&self, state: &SchafkopfState, player: PlayerId) -> Result<String, GameError> {
        self.check_table(state, player)?;
        let mut pieces = vec![format!("p{}", player.0)];

        for (id, &location) in state.locations().iter().enumerate() {
            if self.obs_type.reveals(location, player) {
                pieces.push(format!("c{id}loc{}", location.code(self.player_count)));
            }
        }

        pieces.push("solo_player0".to_string());

        if let Some(trick) = state.current_trick() {
            pieces.push(format!("cur_trick_leader{}", trick.leader().0));
            pieces.push(format!("cur_trick_cards{:?}", card_ids(trick)));
        }
        if let Some(trick) = state.previous_trick() {
            pieces.push(format!("prev_trick_leader{}", trick.leader().0));
            pieces.push(format!("prev_trick_cards{:?}", card_ids(trick)));
        }

        Ok(pieces.join(" "))
    }

    /// The state and seat must belong to the table this layout was built for.
    fn check_table(&self, state: &SchafkopfState, player: PlayerId) -> Result<(), GameError> {
        let seats = state.config().player_count;
        if seats != self.player_count || state.card_count() != self.card_count {
            return Err(GameError::InvalidConfig(format!(
                "observer for {} players and {} cards got a state with {} players and {} cards",
                self.player_count,
                self.card_count,
                seats,
                state.card_count()
            )));
        }
        if player.index() >= self.player_count {
            return Err(GameError::InvalidConfig(format!(
                "seat {} is not at a table of {}",
                player.0, self.player_count
            )));
        }
        Ok(())
    }
}

impl StateEncoder for SchafkopfObserver {
    type State = SchafkopfState;

    fn encode(
        &self,
        state: &SchafkopfState,
        perspective: PlayerId,
    ) -> Result<EncodedState, GameError> {
        self.check_table(state, perspective)?;
        let mut tensor = vec![0.0; self.layout.size()];
        write_features(&self.segments, self.obs_type, &mut tensor, state, perspective);
        Ok(EncodedState::new(tensor, self.output_shape()))
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.layout.size()]
    }

    fn action_space_size(&self) -> usize {
        self.card_count
    }

    fn player_count(&self) -> usize {
        self.player_count
    }
}

fn card_ids(trick: &Trick) -> Vec<usize> {
    trick.cards().iter().map(|c| c.id()).collect()
}

fn write_features(
    segments: &Segments,
    obs_type: ObservationType,
    tensor: &mut [f32],
    state: &SchafkopfState,
    player: PlayerId,
) {
    tensor[segments.player.index(0, player.index())] = 1.0;

    for (id, &location) in state.locations().iter().enumerate() {
        if let CardLocation::Hand(holder) = location {
            if obs_type.reveals(location, player) {
                tensor[segments.private_cards.index(holder.index(), id)] = 1.0;
            }
        }
    }

    // Reserved for the declaring seat once contracts exist.
    tensor[segments.solo_player.index(0, 0)] = 1.0;

    if let Some(trick) = state.current_trick() {
        write_trick(&segments.current_trick_leader, &segments.current_trick, tensor, trick);
    }
    if let Some(trick) = state.previous_trick() {
        write_trick(&segments.previous_trick_leader, &segments.previous_trick, tensor, trick);
    }
}

fn write_trick(leader: &Segment, cards: &Segment, tensor: &mut [f32], trick: &Trick) {
    tensor[leader.index(0, trick.leader().index())] = 1.0;
    for (pos, card) in trick.cards().iter().enumerate() {
        tensor[cards.index(pos, card.id())] = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;
    use crate::rules::RulesEngine;

    fn observer(obs_type: ObservationType) -> SchafkopfObserver {
        SchafkopfObserver::new(&GameConfig::default(), obs_type, &ObserverParams::new()).unwrap()
    }

    /// Default table after the deal: seat 0 {0,3}, seat 1 {2,5}, seat 2 {1,4}.
    fn dealt_state() -> SchafkopfState {
        let mut state = SchafkopfState::new(GameConfig::default());
        for c in 0..6 {
            state.apply_action(Card(c));
        }
        state
    }

    #[test]
    fn test_layout_sizes() {
        let obs = observer(ObservationType::default());
        // 3 + 18 + 3 + 3 + 18 + 3 + 18
        assert_eq!(obs.tensor().len(), 66);
        assert_eq!(obs.segment(PRIVATE_CARDS).unwrap().len(), 18);
        assert_eq!(obs.output_shape(), vec![66]);
        assert_eq!(obs.action_space_size(), 6);
    }

    #[test]
    fn test_params_rejected() {
        let mut params = ObserverParams::new();
        params.insert("perfect_recall".into(), "true".into());

        let err = SchafkopfObserver::new(&GameConfig::default(), ObservationType::default(), &params)
            .unwrap_err();
        assert!(matches!(err, GameError::UnsupportedObserverParams(ref keys) if keys == &["perfect_recall"]));
    }

    #[test]
    fn test_refresh_marks_player_and_hands() {
        let mut obs = observer(ObservationType::default());
        let state = dealt_state();
        obs.refresh(&state, PlayerId::new(1)).unwrap();

        assert_eq!(obs.segment(PLAYER).unwrap(), &[0.0, 1.0, 0.0]);
        assert_eq!(
            obs.segment_row(PRIVATE_CARDS, 0).unwrap(),
            &[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]
        );
        assert_eq!(
            obs.segment_row(PRIVATE_CARDS, 2).unwrap(),
            &[0.0, 1.0, 0.0, 0.0, 1.0, 0.0]
        );
        assert_eq!(obs.segment(SOLO_PLAYER).unwrap(), &[1.0, 0.0, 0.0]);
        assert!(obs.segment(CURRENT_TRICK).unwrap().iter().all(|&v| v == 0.0));
        assert!(obs.segment_row(PRIVATE_CARDS, 3).is_none());
    }

    #[test]
    fn test_single_player_masks_opponents() {
        let mut obs = observer(ObservationType::single_player());
        let state = dealt_state();
        obs.refresh(&state, PlayerId::new(1)).unwrap();

        assert!(obs.segment_row(PRIVATE_CARDS, 0).unwrap().iter().all(|&v| v == 0.0));
        assert_eq!(
            obs.segment_row(PRIVATE_CARDS, 1).unwrap(),
            &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]
        );
        assert_eq!(
            obs.describe(&state, PlayerId::new(1)).unwrap(),
            "p1 c2loc1 c5loc1 solo_player0"
        );
    }

    #[test]
    fn test_trick_rows_follow_play_position() {
        let mut obs = observer(ObservationType::default());
        let mut state = dealt_state();
        for c in [3, 2, 1, 0] {
            state.apply_action(Card(c));
        }
        obs.refresh(&state, PlayerId::new(0)).unwrap();

        // Second trick, led by seat 0 with card 0.
        assert_eq!(obs.segment(CURRENT_TRICK_LEADER).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(obs.segment_row(CURRENT_TRICK, 0).unwrap()[0], 1.0);
        assert!(obs.segment_row(CURRENT_TRICK, 1).unwrap().iter().all(|&v| v == 0.0));

        // First trick: 3, 2, 1 by positions 0, 1, 2.
        assert_eq!(obs.segment(PREVIOUS_TRICK_LEADER).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(obs.segment_row(PREVIOUS_TRICK, 0).unwrap()[3], 1.0);
        assert_eq!(obs.segment_row(PREVIOUS_TRICK, 1).unwrap()[2], 1.0);
        assert_eq!(obs.segment_row(PREVIOUS_TRICK, 2).unwrap()[1], 1.0);
    }

    #[test]
    fn test_refresh_clears_previous_view() {
        let mut obs = observer(ObservationType::default());
        let state = dealt_state();
        obs.refresh(&state, PlayerId::new(2)).unwrap();
        obs.refresh(&state, PlayerId::new(0)).unwrap();

        assert_eq!(obs.segment(PLAYER).unwrap(), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_encode_matches_refresh() {
        let mut obs = observer(ObservationType::default());
        let mut state = dealt_state();
        state.apply_action(Card(3));

        let encoded = obs.encode(&state, PlayerId::new(1)).unwrap();
        obs.refresh(&state, PlayerId::new(1)).unwrap();
        assert_eq!(encoded.tensor, obs.tensor());
        assert_eq!(encoded.shape, vec![66]);
    }

    #[test]
    fn test_describe_full_view() {
        let obs = observer(ObservationType::default());
        let mut state = dealt_state();
        state.apply_action(Card(3));

        assert_eq!(
            obs.describe(&state, PlayerId::new(0)).unwrap(),
            "p0 c0loc0 c1loc2 c2loc1 c3loc5 c4loc2 c5loc1 solo_player0 \
             cur_trick_leader0 cur_trick_cards[3]"
        );
    }

    #[test]
    fn test_mismatched_table_rejected() {
        let mut obs = observer(ObservationType::default());
        obs.refresh(&dealt_state(), PlayerId::new(1)).unwrap();
        let before = obs.tensor().to_vec();

        let config = GameConfig::default().with_players(4).with_suits(2);
        let mut wide = SchafkopfState::new(config);
        for c in 0..12 {
            wide.apply_action(Card(c));
        }

        for seat in [0, 3] {
            let seat = PlayerId::new(seat);
            assert!(matches!(obs.refresh(&wide, seat), Err(GameError::InvalidConfig(_))));
            assert!(matches!(obs.encode(&wide, seat), Err(GameError::InvalidConfig(_))));
            assert!(matches!(obs.describe(&wide, seat), Err(GameError::InvalidConfig(_))));
        }
        assert_eq!(obs.tensor(), &before[..]);

        // Right table, seat outside it.
        let state = dealt_state();
        assert!(matches!(
            obs.refresh(&state, PlayerId::new(3)),
            Err(GameError::InvalidConfig(_))
        ));
        assert_eq!(obs.tensor(), &before[..]);
    }
}
