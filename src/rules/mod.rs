//! Board-state contract for game implementations.
//!
//! Games implement `BoardState` to define:
//! - Legal actions for the side to move
//! - The transition to a successor state
//! - Loss and draw conditions
//!
//! Drivers and encoders call into `BoardState` but never interpret
//! game-specific concepts directly.

pub mod engine;

pub use engine::{BoardState, GameResult};
