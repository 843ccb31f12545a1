//! The board-state contract shared by every game.
//!
//! A `BoardState` is an immutable value describing one position from the
//! point of view of the side about to move. The search driver holds one,
//! asks for legal actions, applies one to get a brand-new successor, and
//! repeats until the state is terminal.
//!
//! ## Implementation Notes
//!
//! - `apply` never mutates its receiver; successors own their arrays.
//! - `is_lost` is evaluated for the side about to move.
//! - `legal_actions` is empty only when `is_terminal` holds.
//! - Everything is synchronous and deterministic, so states can be shared
//!   freely across search workers.

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, ActionId, ActionList, Seat};
use crate::nn::EncodedState;

/// Result of a completed game, named by fixed seat rather than perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Seat),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a seat won.
    #[must_use]
    pub fn is_winner(&self, seat: Seat) -> bool {
        matches!(self, GameResult::Winner(s) if *s == seat)
    }

    /// Score for a seat: 1 win, 0 draw, -1 loss.
    #[must_use]
    pub fn score(&self, seat: Seat) -> f32 {
        match self {
            GameResult::Winner(s) if *s == seat => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => 0.0,
        }
    }
}

/// Two-player, zero-sum, perfect-information board state.
///
/// Implemented once per game; drivers, encoders and bindings are generic
/// over it.
pub trait BoardState: Clone + Send + Sync {
    /// Human-readable game name.
    fn name(&self) -> &'static str;

    /// Size of the action-id space (the evaluator's policy length).
    fn action_space_size(&self) -> usize;

    /// True iff the side about to move has already lost.
    fn is_lost(&self) -> bool;

    /// True iff the game ended without a winner.
    fn is_draw(&self) -> bool;

    /// All actions available to the side about to move.
    fn legal_actions(&self) -> ActionList;

    /// Produce the successor state after `action`, with perspective flipped.
    ///
    /// Fails with `GameOver` on a terminal state, `OutOfRange` for ids outside
    /// the action space, and `Illegal` for ids not in `legal_actions()`.
    fn apply(&self, action: ActionId) -> Result<Self, ActionError>;

    /// True iff the side about to move is the player who moved first.
    fn is_first_player(&self) -> bool;

    /// One-hot occupancy planes for the external evaluator.
    fn feature_planes(&self) -> EncodedState;

    /// Printable board, labeled by fixed seat.
    fn render(&self) -> String;

    // === Convenience Methods ===

    /// True iff the game is over.
    fn is_terminal(&self) -> bool {
        self.is_lost() || self.is_draw()
    }

    /// Check if an id is legal right now.
    fn is_legal(&self, action: ActionId) -> bool {
        self.legal_actions().contains(&action)
    }

    /// Validate `action` against the preconditions of `apply`.
    fn check_action(&self, action: ActionId) -> Result<(), ActionError> {
        let result = if action.index() >= self.action_space_size() {
            Err(ActionError::OutOfRange {
                action,
                action_space: self.action_space_size(),
            })
        } else if self.is_terminal() {
            Err(ActionError::GameOver)
        } else if !self.is_legal(action) {
            Err(ActionError::Illegal { action })
        } else {
            Ok(())
        };

        if let Err(err) = &result {
            tracing::debug!(game = self.name(), %action, %err, "rejected action");
        }
        result
    }

    /// Seat of the side about to move.
    fn current_seat(&self) -> Seat {
        Seat::from_first_player(self.is_first_player())
    }

    /// Final result, or `None` while the game continues.
    ///
    /// A loss takes precedence over a draw that happens on the same ply.
    fn outcome(&self) -> Option<GameResult> {
        if self.is_lost() {
            Some(GameResult::Winner(self.current_seat().opponent()))
        } else if self.is_draw() {
            Some(GameResult::Draw)
        } else {
            None
        }
    }

    /// Value of a terminal state for the side about to move.
    ///
    /// -1 when lost, 0 on a draw, `None` while the game continues.
    fn terminal_value(&self) -> Option<f32> {
        if self.is_lost() {
            Some(-1.0)
        } else if self.is_draw() {
            Some(0.0)
        } else {
            None
        }
    }

    /// Legal actions as a dense mask over the action space.
    fn legal_action_mask(&self) -> Vec<bool> {
        let mut mask = vec![false; self.action_space_size()];
        for action in self.legal_actions() {
            mask[action.index()] = true;
        }
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Seat::Second);
        assert!(!result.is_winner(Seat::First));
        assert!(result.is_winner(Seat::Second));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Seat::First));
        assert!(!draw.is_winner(Seat::Second));
    }

    #[test]
    fn test_game_result_score() {
        let result = GameResult::Winner(Seat::First);
        assert_eq!(result.score(Seat::First), 1.0);
        assert_eq!(result.score(Seat::Second), -1.0);
        assert_eq!(GameResult::Draw.score(Seat::First), 0.0);
    }
}
