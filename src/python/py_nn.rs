//! Evaluator bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::nn::{EncodedState, PolicyValueNetwork};

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    /// Create a new encoded state from tensor data and shape.
    #[new]
    fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        Self(EncodedState::new(tensor, shape))
    }

    /// Get the tensor shape.
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    /// Get the total number of elements.
    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat, reshape with `shape`).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Python-implemented evaluator.
///
/// Wraps a callable taking an `EncodedState` and returning
/// `(policy: list[float], value: float)`.
#[pyclass(name = "PolicyValueNetwork", frozen)]
pub struct PyPolicyValueNetwork {
    callback: PyObject,
    action_space_size: usize,
}

#[pymethods]
impl PyPolicyValueNetwork {
    #[new]
    fn new(callback: PyObject, action_space_size: usize) -> Self {
        Self {
            callback,
            action_space_size,
        }
    }

    /// Call the evaluator on an encoded state.
    fn predict(&self, py: Python<'_>, encoded: &PyEncodedState) -> PyResult<(Vec<f32>, f32)> {
        self.callback.call1(py, (encoded.clone(),))?.extract(py)
    }

    #[getter]
    fn action_space_size(&self) -> usize {
        self.action_space_size
    }
}

impl PyPolicyValueNetwork {
    fn fallback_prediction(&self) -> (Vec<f32>, f32) {
        let policy = vec![1.0 / self.action_space_size.max(1) as f32; self.action_space_size];
        (policy, 0.0)
    }
}

impl PolicyValueNetwork for PyPolicyValueNetwork {
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32) {
        Python::with_gil(|py| {
            let py_encoded = PyEncodedState(encoded.clone());
            match self
                .callback
                .call1(py, (py_encoded,))
                .and_then(|result| result.extract::<(Vec<f32>, f32)>(py))
            {
                Ok(prediction) => prediction,
                Err(err) => {
                    tracing::warn!(%err, "python evaluator failed, using uniform fallback");
                    self.fallback_prediction()
                }
            }
        })
    }
}
