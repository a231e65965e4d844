//! Python bindings for the rust-schafkopf state machine.
//!
//! Exposes the game, its states and the observer to Python search and
//! learning code.
//!
//! # Quick Start
//!
//! ```python
//! import rust_schafkopf as sk
//!
//! game = sk.SchafkopfGame(players=3, suits=1)
//! state = game.new_initial_state()
//! observer = game.make_observer()
//!
//! while not state.is_terminal():
//!     if state.is_chance_node():
//!         action, _ = state.chance_outcomes()[0]
//!     else:
//!         action = state.legal_actions()[0]
//!     state.apply_action(action)
//!
//! observer.set_from(state, 0)
//! tensor = observer.tensor  # numpy float32 array
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;
mod py_observer;

pub use py_core::*;
pub use py_games::*;
pub use py_observer::*;

/// rust_schafkopf: a Schafkopf state machine for game-tree search.
#[pymodule]
fn rust_schafkopf(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameInfo>()?;
    m.add_class::<PySchafkopfGame>()?;
    m.add_class::<PySchafkopfState>()?;
    m.add_class::<PySchafkopfObserver>()?;

    Ok(())
}
