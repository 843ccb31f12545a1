//! Action codec: `action = target_square * 11 + descriptor`.
//!
//! Descriptors 0..8 are step directions (the piece arrives at the target
//! from the opposite side), 8..11 drop a Chick, Elephant or Giraffe from the
//! hand. Squares are in the mover's frame.

use serde::{Deserialize, Serialize};

use super::piece::{Direction, Piece};
use super::state::{COLUMNS, ROWS, SQUARES};
use crate::core::{ActionError, ActionId};

/// Descriptors per target square.
pub const DESCRIPTORS: usize = 11;
/// First drop descriptor.
pub const DROP_BASE: usize = 8;
/// Size of the action space.
pub const ACTION_SPACE: usize = SQUARES * DESCRIPTORS;

/// Encode a (target square, descriptor) pair.
pub fn encode_action(square: usize, descriptor: usize) -> Result<ActionId, ActionError> {
    if square >= SQUARES {
        return Err(ActionError::InvalidSquare { square });
    }
    if descriptor >= DESCRIPTORS {
        return Err(ActionError::InvalidDescriptor { descriptor });
    }
    Ok(ActionId::new((square * DESCRIPTORS + descriptor) as u16))
}

/// Decode an action id into its (target square, descriptor) pair.
pub fn decode_action(action: ActionId) -> Result<(usize, usize), ActionError> {
    if action.index() >= ACTION_SPACE {
        return Err(ActionError::OutOfRange {
            action,
            action_space: ACTION_SPACE,
        });
    }
    Ok((action.index() / DESCRIPTORS, action.index() % DESCRIPTORS))
}

/// What happens at the target square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// A board piece steps onto the target in this direction.
    Step(Direction),
    /// A piece from the hand is placed on the target.
    Drop(Piece),
}

/// Structured form of a capture-game action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShogiMove {
    /// Square the piece ends on, in the mover's frame.
    pub target: usize,
    /// Step direction or dropped piece.
    pub kind: MoveKind,
}

impl ShogiMove {
    /// A step onto `target` in `direction`.
    pub fn step(target: usize, direction: Direction) -> Result<Self, ActionError> {
        check_square(target)?;
        Ok(Self {
            target,
            kind: MoveKind::Step(direction),
        })
    }

    /// A drop of `piece` onto `target`.
    pub fn drop(piece: Piece, target: usize) -> Result<Self, ActionError> {
        check_square(target)?;
        if !piece.is_droppable() {
            return Err(ActionError::InvalidPiece { tag: piece.tag() });
        }
        Ok(Self {
            target,
            kind: MoveKind::Drop(piece),
        })
    }

    /// The step that carries a piece from `source` to `target`.
    ///
    /// Used by input layers that see a move as two clicked squares. Fails
    /// when the squares are not neighbours.
    pub fn from_squares(source: usize, target: usize) -> Result<Self, ActionError> {
        check_square(source)?;
        check_square(target)?;
        let dx = (target % COLUMNS) as i32 - (source % COLUMNS) as i32;
        let dy = (target / COLUMNS) as i32 - (source / COLUMNS) as i32;
        let direction =
            Direction::from_delta(dx, dy).ok_or(ActionError::InvalidSquare { square: target })?;
        Self::step(target, direction)
    }

    /// Codec descriptor for this move.
    #[must_use]
    pub fn descriptor(&self) -> usize {
        match self.kind {
            MoveKind::Step(direction) => direction.index(),
            MoveKind::Drop(piece) => DROP_BASE - 1 + piece.tag() as usize,
        }
    }

    /// Square the moving piece leaves, for steps.
    #[must_use]
    pub fn source(&self) -> Option<usize> {
        match self.kind {
            MoveKind::Step(direction) => {
                let (dx, dy) = direction.delta();
                let x = (self.target % COLUMNS) as i32 - dx;
                let y = (self.target / COLUMNS) as i32 - dy;
                on_board(x, y)
            }
            MoveKind::Drop(_) => None,
        }
    }

    /// Action id for this move.
    #[must_use]
    pub fn encode(&self) -> ActionId {
        ActionId::new((self.target * DESCRIPTORS + self.descriptor()) as u16)
    }

    /// Structured move for an action id.
    pub fn decode(action: ActionId) -> Result<Self, ActionError> {
        let (target, descriptor) = decode_action(action)?;
        let kind = if descriptor < DROP_BASE {
            Direction::from_index(descriptor)
                .map(MoveKind::Step)
                .ok_or(ActionError::InvalidDescriptor { descriptor })?
        } else {
            MoveKind::Drop(Piece::try_from((descriptor + 1 - DROP_BASE) as u8)?)
        };
        Ok(Self { target, kind })
    }
}

impl From<ShogiMove> for ActionId {
    fn from(mv: ShogiMove) -> Self {
        mv.encode()
    }
}

/// Square index for board coordinates, if they are on the board.
pub(crate) fn on_board(x: i32, y: i32) -> Option<usize> {
    ((0..COLUMNS as i32).contains(&x) && (0..ROWS as i32).contains(&y))
        .then(|| (x + y * COLUMNS as i32) as usize)
}

fn check_square(square: usize) -> Result<(), ActionError> {
    if square < SQUARES {
        Ok(())
    } else {
        Err(ActionError::InvalidSquare { square })
    }
}
