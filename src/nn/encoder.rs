//! Feature encoding for evaluator input.
//!
//! Both encoders produce one-hot occupancy planes, own side first. Each
//! side's planes are laid out in that side's own frame, exactly as its piece
//! array is stored.

use crate::games::connect_four::{self, ConnectFourState};
use crate::games::simple_shogi::{self, Piece, SimpleShogiState};
use crate::nn::traits::EncodedState;

/// Encodes a state into a fixed-shape tensor.
pub trait StateEncoder: Send + Sync {
    /// The state type this encoder reads.
    type State;

    /// Encode from the perspective of the side to move.
    fn encode(&self, state: &Self::State) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// Connect Four: 2 planes (own marks, opponent marks) of 6x7.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConnectFourEncoder;

impl StateEncoder for ConnectFourEncoder {
    type State = ConnectFourState;

    fn encode(&self, state: &ConnectFourState) -> EncodedState {
        let tensor = state
            .own_cells()
            .iter()
            .chain(state.opponent_cells().iter())
            .map(|&c| f32::from(c))
            .collect();
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![2, connect_four::HEIGHT, connect_four::WIDTH]
    }

    fn action_space_size(&self) -> usize {
        connect_four::WIDTH
    }
}

/// Simple shogi: per side, 4 piece planes then 3 hand-flag planes, of 4x3.
///
/// A hand-flag plane is all ones when at least one piece of that type is in
/// hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleShogiEncoder;

/// Planes per side.
const SHOGI_PLANES_PER_SIDE: usize = Piece::ALL.len() + Piece::DROPPABLE.len();

impl SimpleShogiEncoder {
    fn push_side(pieces: &[u8; simple_shogi::SLOTS], tensor: &mut Vec<f32>) {
        let board = &pieces[..simple_shogi::SQUARES];
        for piece in Piece::ALL {
            tensor.extend(board.iter().map(|&c| if c == piece.tag() { 1.0 } else { 0.0 }));
        }
        for slot in simple_shogi::SQUARES..simple_shogi::SLOTS {
            let flag = if pieces[slot] > 0 { 1.0 } else { 0.0 };
            tensor.extend(std::iter::repeat(flag).take(simple_shogi::SQUARES));
        }
    }
}

impl StateEncoder for SimpleShogiEncoder {
    type State = SimpleShogiState;

    fn encode(&self, state: &SimpleShogiState) -> EncodedState {
        let mut tensor = Vec::with_capacity(2 * SHOGI_PLANES_PER_SIDE * simple_shogi::SQUARES);
        Self::push_side(state.own_pieces(), &mut tensor);
        Self::push_side(state.opponent_pieces(), &mut tensor);
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![
            2 * SHOGI_PLANES_PER_SIDE,
            simple_shogi::ROWS,
            simple_shogi::COLUMNS,
        ]
    }

    fn action_space_size(&self) -> usize {
        simple_shogi::ACTION_SPACE
    }
}
