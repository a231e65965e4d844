//! Observer behavior across whole games.

use rust_schafkopf::cards::Card;
use rust_schafkopf::core::{GameConfig, GameError, GameRng, PlayerId};
use rust_schafkopf::games::schafkopf::{SchafkopfGame, SchafkopfState};
use rust_schafkopf::observation::{
    ObservationType, ObserverParams, PrivateInfoType, StateEncoder, CURRENT_TRICK,
    CURRENT_TRICK_LEADER, PLAYER, PREVIOUS_TRICK, PREVIOUS_TRICK_LEADER, PRIVATE_CARDS,
    SOLO_PLAYER,
};
use rust_schafkopf::playout::{Playout, UniformPolicy};
use rust_schafkopf::rules::RulesEngine;

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

fn default_dealt() -> SchafkopfState {
    let mut state = SchafkopfGame::default().new_initial_state();
    for c in 0..6 {
        state.apply_action(Card(c));
    }
    state
}

#[test]
fn test_segment_order_and_sizes() {
    let game = SchafkopfGame::new(GameConfig::default().with_players(4).with_suits(2)).unwrap();
    let observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();

    let names: Vec<&str> = observer.layout().segments().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            PLAYER,
            PRIVATE_CARDS,
            SOLO_PLAYER,
            CURRENT_TRICK_LEADER,
            CURRENT_TRICK,
            PREVIOUS_TRICK_LEADER,
            PREVIOUS_TRICK
        ]
    );
    // 4 + 48 + 4 + 4 + 48 + 4 + 48
    assert_eq!(observer.tensor().len(), 160);
    assert_eq!(observer.output_shape(), vec![160]);
    assert_eq!(observer.player_count(), 4);
}

#[test]
fn test_segment_shapes_match_views() {
    let game = SchafkopfGame::default();
    let observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();

    let shapes: Vec<Vec<usize>> = observer
        .layout()
        .segments()
        .iter()
        .map(|s| s.shape.to_vec())
        .collect();
    assert_eq!(
        shapes,
        vec![vec![3], vec![3, 6], vec![3], vec![3], vec![3, 6], vec![3], vec![3, 6]]
    );
    for segment in observer.layout().segments() {
        let view = segment.view(observer.tensor());
        assert_eq!(view.len(), segment.shape.iter().product::<usize>(), "{}", segment.name);
    }
}

#[test]
fn test_initial_state_view() {
    let game = SchafkopfGame::default();
    let state = game.new_initial_state();
    let mut observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();

    observer.refresh(&state, p(0)).unwrap();
    let ones: f32 = observer.tensor().iter().sum();
    // Player one-hot and the solo marker only.
    assert_eq!(ones, 2.0);
    // Every card is listed at the deck location.
    assert_eq!(
        observer.describe(&state, p(0)).unwrap(),
        "p0 c0loc4 c1loc4 c2loc4 c3loc4 c4loc4 c5loc4 solo_player0"
    );
}

#[test]
fn test_observation_string_after_first_trick() {
    let game = SchafkopfGame::default();
    let observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();
    let mut state = default_dealt();
    for c in [3, 2, 1, 0] {
        state.apply_action(Card(c));
    }

    assert_eq!(
        observer.describe(&state, p(2)).unwrap(),
        "p2 c0loc5 c1loc5 c2loc5 c3loc5 c4loc2 c5loc1 solo_player0 \
         cur_trick_leader0 cur_trick_cards[0] \
         prev_trick_leader0 prev_trick_cards[3, 2, 1]"
    );
}

#[test]
fn test_private_info_modes() {
    let game = SchafkopfGame::default();
    let state = default_dealt();

    let hidden = game
        .make_observer(
            ObservationType {
                private_info: PrivateInfoType::None,
            },
            &ObserverParams::new(),
        )
        .unwrap();
    let encoded = hidden.encode(&state, p(1)).unwrap();
    let layout = hidden.layout();
    let private = layout.get(PRIVATE_CARDS).unwrap();
    assert!(private.view(&encoded.tensor).iter().all(|&v| v == 0.0));
    assert_eq!(hidden.describe(&state, p(1)).unwrap(), "p1 solo_player0");

    let single = game
        .make_observer(ObservationType::single_player(), &ObserverParams::new())
        .unwrap();
    let encoded = single.encode(&state, p(2)).unwrap();
    let private = single.layout().get(PRIVATE_CARDS).unwrap();
    let marked: Vec<usize> = (0..private.len())
        .filter(|&i| encoded.tensor[private.offset + i] == 1.0)
        .collect();
    // Row 2 holds cards 1 and 4.
    assert_eq!(marked, vec![2 * 6 + 1, 2 * 6 + 4]);
}

#[test]
fn test_every_position_of_a_random_game_is_consistent() {
    let game = SchafkopfGame::new(GameConfig::default().with_players(3).with_suits(4)).unwrap();
    let mut observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();
    let playout = Playout::new(UniformPolicy);
    let mut rng = GameRng::new(77);
    let mut state = game.new_initial_state();

    loop {
        for seat in PlayerId::all(3) {
            observer.refresh(&state, seat).unwrap();
            assert_eq!(observer.encode(&state, seat).unwrap().tensor, observer.tensor());

            let hands: f32 = observer.segment(PRIVATE_CARDS).unwrap().iter().sum();
            let held = PlayerId::all(3).map(|s| state.player_cards(s).len()).sum::<usize>();
            assert_eq!(hands as usize, held);

            let open: f32 = observer.segment(CURRENT_TRICK).unwrap().iter().sum();
            let expected = state.current_trick().map_or(0, |t| t.cards_played());
            assert_eq!(open as usize, expected);
        }
        if !playout.step(&mut state, &mut rng).unwrap() {
            break;
        }
    }
    assert!(state.is_terminal());
}

#[test]
fn test_unknown_params_listed() {
    let game = SchafkopfGame::default();
    let mut params = ObserverParams::new();
    params.insert("b".into(), "1".into());
    params.insert("a".into(), "2".into());

    match game.make_observer(ObservationType::default(), &params) {
        Err(GameError::UnsupportedObserverParams(keys)) => assert_eq!(keys, vec!["a", "b"]),
        other => panic!("expected UnsupportedObserverParams, got {other:?}"),
    }
}

#[test]
fn test_larger_table_location_codes() {
    // Six seats, two suits: the deck code moves past the last hand.
    let game = SchafkopfGame::new(GameConfig::default().with_players(6).with_suits(2)).unwrap();
    let observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();
    let mut state = game.new_initial_state();
    state.apply_action(Card(0));

    let text = observer.describe(&state, p(5)).unwrap();
    assert!(text.starts_with("p5 c0loc0 c1loc6 "));
}

#[test]
fn test_observer_rejects_state_from_another_table() {
    let game = SchafkopfGame::default();
    let mut observer = game
        .make_observer(ObservationType::default(), &ObserverParams::new())
        .unwrap();
    observer.refresh(&default_dealt(), p(0)).unwrap();
    let before = observer.tensor().to_vec();

    let wide = SchafkopfGame::new(GameConfig::default().with_players(4).with_suits(2)).unwrap();
    let mut state = wide.new_initial_state();
    for c in 0..12 {
        state.apply_action(Card(c));
    }

    assert!(matches!(observer.refresh(&state, p(3)), Err(GameError::InvalidConfig(_))));
    assert!(matches!(observer.encode(&state, p(0)), Err(GameError::InvalidConfig(_))));
    assert!(matches!(observer.describe(&state, p(0)), Err(GameError::InvalidConfig(_))));
    assert_eq!(observer.tensor(), &before[..]);
    assert_eq!(observer.segment(PLAYER).unwrap(), &[1.0, 0.0, 0.0]);
}
