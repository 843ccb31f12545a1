//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{ActionError, ActionId, Seat};
use crate::games::simple_shogi::{self, ShogiMove};
use crate::games::{AnyState, GameKind};
use crate::rules::{BoardState, GameResult};

use super::py_nn::PyEncodedState;

impl From<ActionError> for PyErr {
    fn from(err: ActionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Python wrapper for a position in either game.
///
/// Immutable: `next` returns a new object.
#[pyclass(name = "GameState", frozen)]
#[derive(Clone, Debug)]
pub struct PyGameState(pub AnyState);

#[pymethods]
impl PyGameState {
    /// Create the initial position.
    ///
    /// # Arguments
    /// - game: "connect_four" or "simple_shogi"
    #[new]
    #[pyo3(signature = (game = "connect_four"))]
    fn new(game: &str) -> PyResult<Self> {
        let kind: GameKind = game.parse().map_err(PyValueError::new_err)?;
        Ok(Self(kind.initial_state()))
    }

    /// Game name.
    #[getter]
    fn game(&self) -> &'static str {
        self.0.name()
    }

    /// Size of the action-id space.
    #[getter]
    fn action_space_size(&self) -> usize {
        self.0.action_space_size()
    }

    /// Legal action ids for the side to move.
    fn legal_actions(&self) -> Vec<u16> {
        self.0.legal_actions().into_iter().map(|a| a.0).collect()
    }

    /// Dense legal-action mask over the action space.
    fn legal_action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<bool>> {
        PyArray1::from_slice_bound(py, &self.0.legal_action_mask())
    }

    /// Successor state after `action`.
    ///
    /// Raises ValueError for out-of-range, illegal, or post-game actions.
    fn next(&self, action: u16) -> PyResult<Self> {
        Ok(Self(self.0.apply(ActionId(action))?))
    }

    /// True if the side to move has lost.
    fn is_lose(&self) -> bool {
        self.0.is_lost()
    }

    /// True if the game ended without a winner.
    fn is_draw(&self) -> bool {
        self.0.is_draw()
    }

    /// True if the game is over.
    fn is_done(&self) -> bool {
        self.0.is_terminal()
    }

    /// True if the side to move is the player who moved first.
    fn is_first_player(&self) -> bool {
        self.0.is_first_player()
    }

    /// Value for the side to move: -1 lost, 0 draw, None ongoing.
    fn terminal_value(&self) -> Option<f32> {
        self.0.terminal_value()
    }

    /// Winner as "first" / "second", "draw", or None while ongoing.
    fn outcome(&self) -> Option<&'static str> {
        self.0.outcome().map(result_name)
    }

    /// Side to move's pieces (board then hand for simple shogi).
    #[getter]
    fn pieces(&self) -> Vec<u8> {
        match &self.0 {
            AnyState::ConnectFour(s) => s.own_cells().to_vec(),
            AnyState::SimpleShogi(s) => s.own_pieces().to_vec(),
        }
    }

    /// Opponent's pieces, in the opponent's own frame for simple shogi.
    #[getter]
    fn enemy_pieces(&self) -> Vec<u8> {
        match &self.0 {
            AnyState::ConnectFour(s) => s.opponent_cells().to_vec(),
            AnyState::SimpleShogi(s) => s.opponent_pieces().to_vec(),
        }
    }

    /// Plies played so far.
    #[getter]
    fn depth(&self) -> u32 {
        match &self.0 {
            AnyState::ConnectFour(s) => s.occupied() as u32,
            AnyState::SimpleShogi(s) => s.ply_depth(),
        }
    }

    /// Feature planes for the evaluator.
    fn features(&self) -> PyEncodedState {
        PyEncodedState(self.0.feature_planes())
    }

    fn __str__(&self) -> String {
        self.0.render()
    }

    fn __repr__(&self) -> String {
        let status = match self.0.outcome() {
            Some(result) => result_name(result),
            None => "ongoing",
        };
        format!(
            "GameState(game={}, depth={}, status={})",
            self.0.name(),
            self.depth(),
            status
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

fn result_name(result: GameResult) -> &'static str {
    match result {
        GameResult::Winner(Seat::First) => "first",
        GameResult::Winner(Seat::Second) => "second",
        GameResult::Draw => "draw",
    }
}

/// Encode a simple-shogi action from (square, descriptor).
#[pyfunction]
pub fn shogi_encode_action(square: usize, descriptor: usize) -> PyResult<u16> {
    Ok(simple_shogi::encode_action(square, descriptor)?.0)
}

/// Decode a simple-shogi action into (square, descriptor).
#[pyfunction]
pub fn shogi_decode_action(action: u16) -> PyResult<(usize, usize)> {
    Ok(simple_shogi::decode_action(ActionId(action))?)
}

/// Encode a simple-shogi board move from source and target squares.
#[pyfunction]
pub fn shogi_move_action(source: usize, target: usize) -> PyResult<u16> {
    Ok(ShogiMove::from_squares(source, target)?.encode().0)
}
