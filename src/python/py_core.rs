//! Shared conversions for the Python surface.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Card;
use crate::core::{GameError, GameInfo, PlayerId, ReturnsNormalization};
use crate::observation::PrivateInfoType;

/// Engine errors surface as `ValueError`.
pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Card id from Python, bounds-checked against the deck.
pub(crate) fn card_arg(action: usize, card_count: usize) -> PyResult<Card> {
    if action >= card_count {
        return Err(PyErr::new::<PyValueError, _>(format!(
            "action {action} outside a deck of {card_count} cards"
        )));
    }
    Ok(Card(action as u8))
}

/// Seat id from Python, bounds-checked against the table.
pub(crate) fn player_arg(player: usize, player_count: usize) -> PyResult<PlayerId> {
    if player >= player_count {
        return Err(PyErr::new::<PyValueError, _>(format!(
            "player {player} not seated at a table of {player_count}"
        )));
    }
    Ok(PlayerId::new(player as u8))
}

pub(crate) fn normalization_arg(name: &str) -> PyResult<ReturnsNormalization> {
    match name {
        "half_total" => Ok(ReturnsNormalization::HalfTotal),
        "mean_share" => Ok(ReturnsNormalization::MeanShare),
        other => Err(PyErr::new::<PyValueError, _>(format!(
            "unknown normalization {other:?}; expected \"half_total\" or \"mean_share\""
        ))),
    }
}

pub(crate) fn private_info_arg(name: &str) -> PyResult<PrivateInfoType> {
    match name {
        "all_players" => Ok(PrivateInfoType::AllPlayers),
        "single_player" => Ok(PrivateInfoType::SinglePlayer),
        "none" => Ok(PrivateInfoType::None),
        other => Err(PyErr::new::<PyValueError, _>(format!(
            "unknown private info type {other:?}"
        ))),
    }
}

/// Python wrapper for GameInfo.
#[pyclass(name = "GameInfo")]
#[derive(Clone, Debug)]
pub struct PyGameInfo(pub GameInfo);

#[pymethods]
impl PyGameInfo {
    #[getter]
    fn num_distinct_actions(&self) -> usize {
        self.0.num_distinct_actions
    }

    #[getter]
    fn max_chance_outcomes(&self) -> usize {
        self.0.max_chance_outcomes
    }

    #[getter]
    fn num_players(&self) -> usize {
        self.0.num_players
    }

    #[getter]
    fn min_utility(&self) -> f64 {
        self.0.min_utility
    }

    #[getter]
    fn max_utility(&self) -> f64 {
        self.0.max_utility
    }

    /// `None` when payoffs are not guaranteed to sum to zero.
    #[getter]
    fn utility_sum(&self) -> Option<f64> {
        self.0.utility_sum
    }

    #[getter]
    fn max_game_length(&self) -> usize {
        self.0.max_game_length
    }

    fn __repr__(&self) -> String {
        format!(
            "GameInfo(num_players={}, num_distinct_actions={}, max_game_length={})",
            self.0.num_players, self.0.num_distinct_actions, self.0.max_game_length
        )
    }
}
