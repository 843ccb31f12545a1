//! Connect Four on a 7x6 board.
//!
//! Marks drop to the lowest empty cell of a column; four in a row
//! horizontally, vertically or diagonally wins; a full board without a line
//! is a draw. Actions are column indices 0..7.

mod state;

pub use state::{ConnectFourState, CELLS, CONNECT, HEIGHT, WIDTH};
