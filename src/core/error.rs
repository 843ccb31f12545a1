//! Error taxonomy for the rules engines.
//!
//! All inputs to the engines are closed, finite enumerations, so the only
//! failures are caller errors: an id outside the codec's domain, an id that is
//! not legal in the current position, or a move requested after the game has
//! ended. They are reported before any state is produced.

use thiserror::Error;

use super::action::ActionId;

/// Precondition violations reported by the rules engines and the action codec.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The id lies outside the game's action space.
    #[error("action {action} is outside the action space 0..{action_space}")]
    OutOfRange { action: ActionId, action_space: usize },

    /// The id is well-formed but not a legal action in this position.
    #[error("action {action} is not legal in this position")]
    Illegal { action: ActionId },

    /// The position is terminal; no further actions can be applied.
    #[error("game is over: no action can be applied to a terminal state")]
    GameOver,

    /// A board square outside the grid.
    #[error("square {square} is not on the board")]
    InvalidSquare { square: usize },

    /// A move descriptor outside the codec's descriptor range.
    #[error("descriptor {descriptor} is not a movement direction or drop selector")]
    InvalidDescriptor { descriptor: usize },

    /// A piece tag outside the game's piece enumeration.
    #[error("piece tag {tag} is not a known piece")]
    InvalidPiece { tag: u8 },

    /// Both sides claim the same square.
    #[error("square {square} is occupied by both sides")]
    SquareConflict { square: usize },

    /// More pieces of one type in hand than the game contains.
    #[error("hand holds {count} of piece tag {tag}, more than the game contains")]
    InvalidHand { tag: u8, count: u8 },

    /// Mark counts that no sequence of alternating moves can produce.
    #[error("{own} marks for the side to move and {opponent} for the other side is not a reachable turn order")]
    UnbalancedMarks { own: usize, opponent: usize },
}
