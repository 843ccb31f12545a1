//! Baseline play bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameRng, Seat};
use crate::games::GameKind;
use crate::nn::{EncodedState, PolicyValueNetwork};
use crate::training::{self, GameRecord, PolicyPlayer, RandomPlayer, SelfPlayConfig};

use super::py_games::PyGameState;
use super::py_nn::PyPolicyValueNetwork;

/// Python wrapper for SelfPlayConfig.
#[pyclass(name = "SelfPlayConfig")]
#[derive(Clone)]
pub struct PySelfPlayConfig(pub SelfPlayConfig);

#[pymethods]
impl PySelfPlayConfig {
    /// # Arguments
    /// - seed: RNG seed (default: 42)
    /// - max_plies: Ply bound per game (default: 1000)
    /// - record_features: Keep encoded states in records (default: False)
    #[new]
    #[pyo3(signature = (seed = 42, max_plies = 1_000, record_features = false))]
    fn new(seed: u64, max_plies: usize, record_features: bool) -> Self {
        Self(
            SelfPlayConfig::new()
                .with_seed(seed)
                .with_max_plies(max_plies)
                .with_record_features(record_features),
        )
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed
    }

    #[getter]
    fn max_plies(&self) -> usize {
        self.0.max_plies
    }

    #[getter]
    fn record_features(&self) -> bool {
        self.0.record_features
    }

    fn __repr__(&self) -> String {
        format!(
            "SelfPlayConfig(seed={}, max_plies={}, record_features={})",
            self.0.seed, self.0.max_plies, self.0.record_features
        )
    }
}

/// Python wrapper for a played game.
#[pyclass(name = "GameRecord")]
#[derive(Clone)]
pub struct PyGameRecord(pub GameRecord);

#[pymethods]
impl PyGameRecord {
    #[getter]
    fn game(&self) -> String {
        self.0.game.clone()
    }

    #[getter]
    fn actions(&self) -> Vec<u16> {
        self.0.actions.iter().map(|a| a.0).collect()
    }

    /// 1 first player won, -1 second player won, 0 draw, None unfinished.
    #[getter]
    fn result(&self) -> Option<f32> {
        self.0.result.map(|r| r.score(Seat::First))
    }

    fn __len__(&self) -> usize {
        self.0.plies()
    }

    fn __repr__(&self) -> String {
        format!(
            "GameRecord(game={}, plies={}, result={:?})",
            self.0.game,
            self.0.plies(),
            self.0.result
        )
    }
}

/// Play one uniform-random game from the initial position.
#[pyfunction]
#[pyo3(signature = (game, config = None))]
pub fn play_random_game(game: &str, config: Option<&PySelfPlayConfig>) -> PyResult<PyGameRecord> {
    let kind: GameKind = game.parse().map_err(pyo3::exceptions::PyValueError::new_err)?;
    let config = config.map(|c| c.0.clone()).unwrap_or_default();
    let mut rng = GameRng::new(config.seed);
    let record = training::play_random_game(kind.initial_state(), &config, &mut rng)?;
    Ok(PyGameRecord(record))
}

/// Play one game from `state`, the evaluator against a random opponent.
///
/// The evaluator moves first from `state`.
#[pyfunction]
#[pyo3(signature = (state, network, config = None))]
pub fn play_against_random(
    state: &PyGameState,
    network: Py<PyPolicyValueNetwork>,
    config: Option<&PySelfPlayConfig>,
) -> PyResult<PyGameRecord> {
    let config = config.map(|c| c.0.clone()).unwrap_or_default();
    let mut rng = GameRng::new(config.seed);
    let mut player = PolicyPlayer::new(NetworkHandle(network));
    let record = training::play_game(state.0, &mut player, &mut RandomPlayer, &config, &mut rng)?;
    Ok(PyGameRecord(record))
}

/// Owned handle to a Python evaluator, usable as a Rust `PolicyValueNetwork`.
struct NetworkHandle(Py<PyPolicyValueNetwork>);

impl PolicyValueNetwork for NetworkHandle {
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32) {
        PolicyValueNetwork::predict(self.0.get(), encoded)
    }
}
