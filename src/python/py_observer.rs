//! Observer bindings for Python.

use numpy::{PyArray1, PyArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::observation::{SchafkopfObserver, StateEncoder};

use super::py_core::{player_arg, to_py_err};
use super::py_games::PySchafkopfState;

/// Python wrapper for SchafkopfObserver.
#[pyclass(name = "SchafkopfObserver")]
pub struct PySchafkopfObserver {
    observer: SchafkopfObserver,
}

impl From<SchafkopfObserver> for PySchafkopfObserver {
    fn from(observer: SchafkopfObserver) -> Self {
        Self { observer }
    }
}

#[pymethods]
impl PySchafkopfObserver {
    /// Refresh the buffer for `player`'s view of `state`.
    fn set_from(&mut self, state: &PySchafkopfState, player: usize) -> PyResult<()> {
        let player = player_arg(player, self.observer.player_count())?;
        self.observer.refresh(&state.state, player).map_err(to_py_err)
    }

    /// Observation string for `player`'s view of `state`.
    fn string_from(&self, state: &PySchafkopfState, player: usize) -> PyResult<String> {
        let player = player_arg(player, self.observer.player_count())?;
        self.observer.describe(&state.state, player).map_err(to_py_err)
    }

    /// Flat buffer as a numpy array (copied).
    #[getter]
    fn tensor<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, self.observer.tensor())
    }

    /// Named segments as numpy arrays (copied), each in its segment's shape.
    #[getter]
    fn dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for segment in self.observer.layout().segments() {
            let view = segment.view(self.observer.tensor());
            let array = PyArray1::from_slice_bound(py, view).reshape(segment.shape.to_vec())?;
            dict.set_item(&segment.name, array)?;
        }
        Ok(dict)
    }

    /// Segment shapes, keyed by name.
    fn shapes(&self) -> Vec<(String, Vec<usize>)> {
        self.observer
            .layout()
            .segments()
            .iter()
            .map(|s| (s.name.clone(), s.shape.to_vec()))
            .collect()
    }

    fn __len__(&self) -> usize {
        self.observer.tensor().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "SchafkopfObserver(size={}, private_info={:?})",
            self.observer.tensor().len(),
            self.observer.observation_type().private_info
        )
    }
}
