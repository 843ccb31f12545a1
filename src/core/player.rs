//! Seat identification for two-player games.
//!
//! States never store whose turn it is. The side to move is always the
//! state's "own" array; which seat that array belongs to is derived from move
//! parity. `Seat` is the fixed labeling used when a result or a rendering
//! has to name a side independently of perspective.

use serde::{Deserialize, Serialize};

/// One of the two sides of the board.
///
/// The first player moves on even plies, the second on odd plies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats in move order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// The seat that moves at a given parity.
    #[must_use]
    pub const fn from_first_player(is_first_player: bool) -> Self {
        if is_first_player {
            Seat::First
        } else {
            Seat::Second
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// 0 for the first player, 1 for the second.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "First player"),
            Seat::Second => write!(f, "Second player"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_basics() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
        assert_eq!(format!("{}", Seat::First), "First player");
    }

    #[test]
    fn test_seat_opponent() {
        assert_eq!(Seat::First.opponent(), Seat::Second);
        assert_eq!(Seat::Second.opponent(), Seat::First);
        for seat in Seat::ALL {
            assert_eq!(seat.opponent().opponent(), seat);
        }
    }

    #[test]
    fn test_seat_from_parity() {
        assert_eq!(Seat::from_first_player(true), Seat::First);
        assert_eq!(Seat::from_first_player(false), Seat::Second);
    }

    #[test]
    fn test_seat_serialization() {
        let json = serde_json::to_string(&Seat::Second).unwrap();
        let deserialized: Seat = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Seat::Second);
    }
}
