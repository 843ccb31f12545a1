//! Evaluator integration.
//!
//! This module provides the tensor encoding of states and the contract an
//! external policy/value model fulfils for PV-MCTS.
//!
//! ## Overview
//!
//! - **Traits**: `PolicyValueNetwork`, `StateEncoder`
//! - **Encoding**: `ConnectFourEncoder` (`[2, 6, 7]`), `SimpleShogiEncoder` (`[14, 4, 3]`)
//! - **Baseline**: `UniformPolicyZeroValue` for testing
//! - **Masking**: `legal_policy` restricts a policy to the legal actions
//!
//! ## Usage
//!
//! ```
//! use rust_duel::games::connect_four::ConnectFourState;
//! use rust_duel::nn::{legal_policy, PolicyValueNetwork, UniformPolicyZeroValue};
//! use rust_duel::rules::BoardState;
//!
//! let state = ConnectFourState::new();
//! let network = UniformPolicyZeroValue::new(state.action_space_size());
//!
//! let (policy, value) = network.predict(&state.feature_planes());
//! let legal = state.legal_actions();
//! let probs = legal_policy(&policy, &legal);
//!
//! assert_eq!(probs.len(), legal.len());
//! assert_eq!(value, 0.0);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{ConnectFourEncoder, SimpleShogiEncoder, StateEncoder};
pub use traits::{legal_policy, EncodedState, PolicyValueNetwork, UniformPolicyZeroValue};
