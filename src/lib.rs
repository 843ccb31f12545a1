//! # rust-duel
//!
//! Rules engines for two-player, zero-sum, perfect-information board games,
//! built to be driven by a PV-MCTS self-play loop.
//!
//! ## Design Principles
//!
//! 1. **Perspective-Relative**: Every state is stored from the point of view
//!    of the side about to move. Applying an action swaps the two sides.
//!
//! 2. **Immutable States**: `apply` returns a fresh successor; the receiver is
//!    never touched, so search trees can share states freely.
//!
//! 3. **Flat Action Ids**: Actions are dense integers so an evaluator's policy
//!    head can index them directly.
//!
//! ## Games
//!
//! - `ConnectFourState`: 7x6 gravity drop, 4 in a row wins. 7 actions.
//! - `SimpleShogiState`: 3x4 board with capture and drop, lion capture wins,
//!   300-ply draw. 132 actions.
//!
//! ## Modules
//!
//! - `core`: Action ids, errors, seats, RNG
//! - `rules`: `BoardState` trait shared by every game
//! - `games`: The two rules engines and the runtime-chosen `AnyState`
//! - `nn`: Feature encoding and the evaluator contract
//! - `training`: Random and policy baseline players

pub mod core;
pub mod games;
pub mod nn;
pub mod rules;
pub mod training;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{ActionError, ActionId, ActionList, GameRng, Seat};

pub use crate::rules::{BoardState, GameResult};

pub use crate::games::connect_four::ConnectFourState;
pub use crate::games::simple_shogi::{ShogiMove, SimpleShogiState};
pub use crate::games::{AnyState, GameKind};

pub use crate::nn::{EncodedState, PolicyValueNetwork, StateEncoder};

pub use crate::training::{GameRecord, SelfPlayConfig};
