//! Core types shared by every game: action ids, errors, seats, RNG.
//!
//! Nothing in here knows about a particular board.

pub mod action;
pub mod error;
pub mod player;
pub mod rng;

pub use action::{ActionId, ActionList};
pub use error::ActionError;
pub use player::Seat;
pub use rng::GameRng;
