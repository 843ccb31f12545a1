//! Python bindings for the rust-duel rules engines.
//!
//! # Quick Start
//!
//! ```python
//! import rust_duel as duel
//!
//! state = duel.GameState("simple_shogi")
//! while not state.is_done():
//!     state = state.next(state.legal_actions()[0])
//!
//! planes = state.features().to_numpy()
//! record = duel.play_random_game("connect_four", duel.SelfPlayConfig(seed=7))
//! ```

use pyo3::prelude::*;

mod py_games;
mod py_nn;
mod py_self_play;

pub use py_games::*;
pub use py_nn::*;
pub use py_self_play::*;

/// rust-duel: Connect Four and simple shogi for PV-MCTS training.
#[pymodule]
fn rust_duel(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Games
    m.add_class::<PyGameState>()?;
    m.add_function(wrap_pyfunction!(shogi_encode_action, m)?)?;
    m.add_function(wrap_pyfunction!(shogi_decode_action, m)?)?;
    m.add_function(wrap_pyfunction!(shogi_move_action, m)?)?;

    // Evaluator types
    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyPolicyValueNetwork>()?;

    // Baseline play
    m.add_class::<PySelfPlayConfig>()?;
    m.add_class::<PyGameRecord>()?;
    m.add_function(wrap_pyfunction!(play_random_game, m)?)?;
    m.add_function(wrap_pyfunction!(play_against_random, m)?)?;

    Ok(())
}
