//! Evaluator contract for policy and value prediction.
//!
//! The evaluator lives outside this crate (typically a Python model reached
//! through the `python` feature). It receives `EncodedState` tensors and
//! returns a distribution over the whole action-id space plus a scalar value
//! for the side to move. The rules engines never interpret either.

use serde::{Deserialize, Serialize};

use crate::core::ActionId;

/// Encoded game state as a flat tensor for evaluator input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor, `[planes, height, width]`.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// One plane (the leading axis) as a slice.
    #[must_use]
    pub fn plane(&self, index: usize) -> Option<&[f32]> {
        let plane_len: usize = self.shape.iter().skip(1).product();
        let start = index.checked_mul(plane_len)?;
        self.tensor.get(start..start + plane_len)
    }
}

/// Combined policy-value evaluator.
pub trait PolicyValueNetwork: Send + Sync {
    /// Predict (policy over the full action space, value for the side to move).
    ///
    /// The value is in [-1, 1].
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32);

    /// Batch prediction for multiple states.
    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<(Vec<f32>, f32)> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Uniform policy and zero value (baseline for testing).
#[derive(Clone, Debug, Default)]
pub struct UniformPolicyZeroValue {
    action_space_size: usize,
}

impl UniformPolicyZeroValue {
    /// Create a baseline evaluator for an action space.
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl PolicyValueNetwork for UniformPolicyZeroValue {
    fn predict(&self, _encoded: &EncodedState) -> (Vec<f32>, f32) {
        if self.action_space_size == 0 {
            return (vec![], 0.0);
        }
        let prob = 1.0 / self.action_space_size as f32;
        (vec![prob; self.action_space_size], 0.0)
    }
}

/// Restrict a full-space policy to the legal actions and renormalize.
///
/// Returns one probability per entry of `legal`, in the same order. Falls
/// back to uniform when the legal actions carry no mass.
pub fn legal_policy(policy: &[f32], legal: &[ActionId]) -> Vec<f32> {
    let mut probs: Vec<f32> = legal
        .iter()
        .map(|a| policy.get(a.index()).copied().unwrap_or(0.0).max(0.0))
        .collect();

    let total: f32 = probs.iter().sum();
    if total > 0.0 {
        probs.iter_mut().for_each(|p| *p /= total);
    } else if !probs.is_empty() {
        let uniform = 1.0 / probs.len() as f32;
        probs.iter_mut().for_each(|p| *p = uniform);
    }
    probs
}
