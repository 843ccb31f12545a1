//! Simple shogi: a 3x4 capture-and-drop game.
//!
//! Each side starts with a Lion (king-like), an Elephant (bishop-like), a
//! Giraffe (rook-like) and a Chick (pawn-like). Pieces step one square;
//! captured pieces go to the captor's hand and can be dropped on any empty
//! square. Capturing the Lion wins; 300 plies without a result is a draw.
//!
//! Actions are encoded as `target_square * 11 + descriptor`, see `codec`.

pub mod codec;
mod piece;
mod state;

pub use codec::{decode_action, encode_action, MoveKind, ShogiMove, ACTION_SPACE, DESCRIPTORS};
pub use piece::{Direction, Piece};
pub use state::{
    mirror, SimpleShogiState, COLUMNS, HAND_LIMIT, HAND_SLOTS, MAX_PLIES, ROWS, SLOTS, SQUARES,
};
