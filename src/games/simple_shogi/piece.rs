//! Pieces and step directions.

use serde::{Deserialize, Serialize};

use crate::core::ActionError;

/// Piece types, tagged 1..=4 in the piece arrays (0 is an empty square).
///
/// Every piece moves exactly one square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Piece {
    /// Pawn-like: forward only.
    Chick = 1,
    /// Bishop-like: the four diagonals.
    Elephant = 2,
    /// Rook-like: the four orthogonals.
    Giraffe = 3,
    /// King-like: all eight neighbours. Losing it loses the game.
    Lion = 4,
}

impl Piece {
    /// Pieces that can be captured into a hand and dropped, in hand-slot order.
    pub const DROPPABLE: [Piece; 3] = [Piece::Chick, Piece::Elephant, Piece::Giraffe];

    /// All piece types in tag order.
    pub const ALL: [Piece; 4] = [Piece::Chick, Piece::Elephant, Piece::Giraffe, Piece::Lion];

    /// Tag stored in the piece arrays.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Decode a board cell; 0 and unknown tags are `None`.
    #[must_use]
    pub const fn from_cell(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Piece::Chick),
            2 => Some(Piece::Elephant),
            3 => Some(Piece::Giraffe),
            4 => Some(Piece::Lion),
            _ => None,
        }
    }

    /// Directions this piece may step in.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        use Direction::*;
        match self {
            Piece::Chick => &[Up],
            Piece::Elephant => &[UpRight, DownRight, DownLeft, UpLeft],
            Piece::Giraffe => &[Up, Right, Down, Left],
            Piece::Lion => &Direction::ALL,
        }
    }

    /// Whether a captured piece of this type goes to the captor's hand.
    #[must_use]
    pub const fn is_droppable(self) -> bool {
        !matches!(self, Piece::Lion)
    }

    /// Board letter for the first player; the second player uses lower case.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Piece::Chick => 'H',
            Piece::Elephant => 'Z',
            Piece::Giraffe => 'K',
            Piece::Lion => 'R',
        }
    }
}

impl TryFrom<u8> for Piece {
    type Error = ActionError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Piece::from_cell(tag).ok_or(ActionError::InvalidPiece { tag })
    }
}

/// Step directions in the mover's frame, numbered as in the action codec.
///
/// "Up" points toward the opponent (row 0 of the mover's board).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
}

impl Direction {
    /// All directions in codec order.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// Codec descriptor (0..8).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for a codec descriptor.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// (dx, dy) with y growing away from the opponent.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::DownLeft => (-1, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Direction matching a (dx, dy) step, if it is a single king step.
    #[must_use]
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.delta() == (dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_tags() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_cell(piece.tag()), Some(piece));
            assert_eq!(Piece::try_from(piece.tag()), Ok(piece));
        }
        assert_eq!(Piece::from_cell(0), None);
        assert_eq!(Piece::try_from(5), Err(ActionError::InvalidPiece { tag: 5 }));
    }

    #[test]
    fn test_movement_tables() {
        assert_eq!(Piece::Chick.directions(), &[Direction::Up]);
        assert_eq!(Piece::Elephant.directions().len(), 4);
        assert_eq!(Piece::Giraffe.directions().len(), 4);
        assert_eq!(Piece::Lion.directions().len(), 8);

        // Bishop-like and rook-like pieces never share a direction.
        for d in Piece::Elephant.directions() {
            assert!(!Piece::Giraffe.directions().contains(d));
        }
    }

    #[test]
    fn test_lion_is_not_droppable() {
        assert!(!Piece::Lion.is_droppable());
        assert!(Piece::DROPPABLE.iter().all(|p| p.is_droppable()));
    }

    #[test]
    fn test_direction_deltas() {
        for d in Direction::ALL {
            let (dx, dy) = d.delta();
            assert_eq!(Direction::from_delta(dx, dy), Some(d));
            assert_eq!(Direction::from_index(d.index()), Some(d));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_index(8), None);
    }
}
