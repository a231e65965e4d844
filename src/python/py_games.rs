//! Game and state bindings for Python.

use std::collections::BTreeMap;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{Actor, GameConfig};
use crate::games::schafkopf::{SchafkopfGame, SchafkopfState};
use crate::observation::ObservationType;
use crate::rules::RulesEngine;

use super::py_core::{
    card_arg, normalization_arg, player_arg, private_info_arg, to_py_err, PyGameInfo,
};
use super::py_observer::PySchafkopfObserver;

/// Python wrapper for SchafkopfGame.
#[pyclass(name = "SchafkopfGame")]
#[derive(Clone)]
pub struct PySchafkopfGame {
    game: SchafkopfGame,
}

#[pymethods]
impl PySchafkopfGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - players: Number of seats (2-8)
    /// - suits: Number of suits in the deck (1-4)
    /// - starting_seat: Seat that leads the first trick
    /// - normalization: "half_total" or "mean_share"
    #[new]
    #[pyo3(signature = (players = 3, suits = 1, starting_seat = 0, normalization = "half_total"))]
    fn new(players: usize, suits: usize, starting_seat: usize, normalization: &str) -> PyResult<Self> {
        let config = GameConfig::default()
            .with_players(players)
            .with_suits(suits)
            .with_normalization(normalization_arg(normalization)?);
        let config = config.with_starting_seat(player_arg(starting_seat, players)?);
        let game = SchafkopfGame::new(config).map_err(to_py_err)?;
        Ok(Self { game })
    }

    fn new_initial_state(&self) -> PySchafkopfState {
        PySchafkopfState {
            state: self.game.new_initial_state(),
        }
    }

    /// Create an observer.
    ///
    /// `private_info` is one of "all_players", "single_player", "none".
    /// Any entry in `params` is rejected.
    #[pyo3(signature = (private_info = "all_players", params = None))]
    fn make_observer(
        &self,
        private_info: &str,
        params: Option<BTreeMap<String, String>>,
    ) -> PyResult<PySchafkopfObserver> {
        let obs_type = ObservationType {
            private_info: private_info_arg(private_info)?,
        };
        let observer = self
            .game
            .make_observer(obs_type, &params.unwrap_or_default())
            .map_err(to_py_err)?;
        Ok(PySchafkopfObserver::from(observer))
    }

    fn info(&self) -> PyGameInfo {
        PyGameInfo(self.game.info())
    }

    #[getter]
    fn num_players(&self) -> usize {
        self.game.config().player_count
    }

    #[getter]
    fn num_distinct_actions(&self) -> usize {
        self.game.config().card_count()
    }

    fn __repr__(&self) -> String {
        let config = self.game.config();
        format!(
            "SchafkopfGame(players={}, suits={}, starting_seat={})",
            config.player_count, config.suit_count, config.starting_seat.0
        )
    }
}

/// Python wrapper for SchafkopfState.
#[pyclass(name = "SchafkopfState")]
#[derive(Clone)]
pub struct PySchafkopfState {
    pub(crate) state: SchafkopfState,
}

#[pymethods]
impl PySchafkopfState {
    /// Seat to move; `None` at chance and terminal nodes.
    fn current_player(&self) -> Option<usize> {
        self.state.current_player().map(|p| p.index())
    }

    fn is_chance_node(&self) -> bool {
        self.state.is_chance_node()
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Legal card ids for whoever moves next, ascending.
    fn legal_actions(&self) -> Vec<usize> {
        self.state
            .current_legal_actions()
            .into_iter()
            .map(|c| c.id())
            .collect()
    }

    /// `(card id, probability)` pairs at a chance node.
    fn chance_outcomes(&self) -> PyResult<Vec<(usize, f64)>> {
        let outcomes = self.state.chance_outcomes().map_err(to_py_err)?;
        Ok(outcomes.into_iter().map(|(c, p)| (c.id(), p)).collect())
    }

    /// Apply a card id for the current actor.
    ///
    /// Raises `ValueError` for illegal actions instead of corrupting the state.
    fn apply_action(&mut self, action: usize) -> PyResult<()> {
        let card = card_arg(action, self.state.card_count())?;
        if !self.state.current_legal_actions().contains(&card) {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "action {action} is not legal for {}",
                self.state.current_actor()
            )));
        }
        self.state.apply_action(card);
        Ok(())
    }

    fn returns(&self) -> Vec<f64> {
        self.state.returns()
    }

    /// Label an action as if `player` made it; `None` labels a deal.
    #[pyo3(signature = (action, player = None))]
    fn action_to_string(&self, action: usize, player: Option<usize>) -> PyResult<String> {
        let card = card_arg(action, self.state.card_count())?;
        let actor = match player {
            Some(p) => Actor::Player(player_arg(p, self.state.player_count())?),
            None => Actor::Chance,
        };
        Ok(self.state.action_to_string(actor, card))
    }

    /// Card ids applied so far, in order.
    fn history(&self) -> Vec<usize> {
        self.state.history().iter().map(|e| e.card.id()).collect()
    }

    /// Accumulated points of a seat.
    fn points(&self, player: usize) -> PyResult<u32> {
        Ok(self.state.points(player_arg(player, self.state.player_count())?))
    }

    /// Card ids currently held by a seat.
    fn player_cards(&self, player: usize) -> PyResult<Vec<usize>> {
        let player = player_arg(player, self.state.player_count())?;
        Ok(self.state.player_cards(player).into_iter().map(|c| c.id()).collect())
    }

    /// Independent copy for search.
    #[pyo3(name = "clone")]
    fn clone_state(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }

    fn serialize<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.state.to_bytes().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    #[staticmethod]
    fn deserialize(data: &[u8]) -> PyResult<Self> {
        let state = SchafkopfState::from_bytes(data).map_err(to_py_err)?;
        Ok(Self { state })
    }

    fn __str__(&self) -> String {
        self.state.describe()
    }

    fn __repr__(&self) -> String {
        format!(
            "SchafkopfState(phase={:?}, cards_played={}, actor={})",
            self.state.phase(),
            self.state.cards_played(),
            self.state.current_actor()
        )
    }
}
