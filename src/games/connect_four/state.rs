//! Connect Four state and rules.

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, ActionId, ActionList};
use crate::nn::{ConnectFourEncoder, EncodedState, StateEncoder};
use crate::rules::BoardState;

/// Board width (number of columns, and of actions).
pub const WIDTH: usize = 7;
/// Board height.
pub const HEIGHT: usize = 6;
/// Total cells, row-major with row 0 at the top.
pub const CELLS: usize = WIDTH * HEIGHT;
/// Marks in a row needed to win.
pub const CONNECT: usize = 4;

/// Scan directions: right, down, up-right, down-right.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, -1), (1, 1)];

/// Connect Four position from the side to move.
///
/// `own` holds the marks of the player about to move, `opponent` those of
/// the player who just moved. Each cell is 0 (empty) or 1 (occupied). Both
/// arrays share the same orientation; applying an action swaps them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectFourState {
    #[serde(with = "cells_serde")]
    own: [u8; CELLS],
    #[serde(with = "cells_serde")]
    opponent: [u8; CELLS],
}

impl ConnectFourState {
    /// Empty board, first player to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            own: [0; CELLS],
            opponent: [0; CELLS],
        }
    }

    /// Build a position from raw cell arrays.
    ///
    /// Cells must be 0 or 1 and no cell may be claimed by both sides. Mark
    /// counts must match a real turn order: equal when the first player is to
    /// move, one short when the second player is. Gravity is not checked, so
    /// floating marks are accepted.
    pub fn from_cells(own: [u8; CELLS], opponent: [u8; CELLS]) -> Result<Self, ActionError> {
        for (i, (&a, &b)) in own.iter().zip(opponent.iter()).enumerate() {
            if a > 1 {
                return Err(ActionError::InvalidPiece { tag: a });
            }
            if b > 1 {
                return Err(ActionError::InvalidPiece { tag: b });
            }
            if a == 1 && b == 1 {
                return Err(ActionError::SquareConflict { square: i });
            }
        }

        let (own_marks, opponent_marks) = (Self::piece_count(&own), Self::piece_count(&opponent));
        if own_marks != opponent_marks && own_marks + 1 != opponent_marks {
            return Err(ActionError::UnbalancedMarks {
                own: own_marks,
                opponent: opponent_marks,
            });
        }
        Ok(Self { own, opponent })
    }

    /// Marks of the side to move.
    #[must_use]
    pub fn own_cells(&self) -> &[u8; CELLS] {
        &self.own
    }

    /// Marks of the side that just moved.
    #[must_use]
    pub fn opponent_cells(&self) -> &[u8; CELLS] {
        &self.opponent
    }

    /// Number of marks in a cell array.
    #[must_use]
    pub fn piece_count(cells: &[u8; CELLS]) -> usize {
        cells.iter().filter(|&&c| c == 1).count()
    }

    /// Total marks on the board.
    #[must_use]
    pub fn occupied(&self) -> usize {
        Self::piece_count(&self.own) + Self::piece_count(&self.opponent)
    }

    #[inline]
    fn is_empty_cell(&self, index: usize) -> bool {
        self.own[index] == 0 && self.opponent[index] == 0
    }

    /// Row a mark dropped in `column` would land on, if the column has room.
    #[must_use]
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.is_empty_cell(column + row * WIDTH))
    }

    /// Check whether `cells` has `CONNECT` marks starting at (x, y) along (dx, dy).
    fn is_line(cells: &[u8; CELLS], x: i32, y: i32, dx: i32, dy: i32) -> bool {
        (0..CONNECT as i32).all(|k| {
            let (cx, cy) = (x + dx * k, y + dy * k);
            (0..WIDTH as i32).contains(&cx)
                && (0..HEIGHT as i32).contains(&cy)
                && cells[(cx + cy * WIDTH as i32) as usize] == 1
        })
    }

    fn has_line(cells: &[u8; CELLS]) -> bool {
        (0..HEIGHT as i32).any(|y| {
            (0..WIDTH as i32).any(|x| {
                DIRECTIONS
                    .iter()
                    .any(|&(dx, dy)| Self::is_line(cells, x, y, dx, dy))
            })
        })
    }

    fn is_full(&self) -> bool {
        self.occupied() == CELLS
    }
}

impl Default for ConnectFourState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState for ConnectFourState {
    fn name(&self) -> &'static str {
        "connect_four"
    }

    fn action_space_size(&self) -> usize {
        WIDTH
    }

    /// The player who just moved completed a line.
    fn is_lost(&self) -> bool {
        Self::has_line(&self.opponent)
    }

    fn is_draw(&self) -> bool {
        self.is_full() && !self.is_lost()
    }

    fn legal_actions(&self) -> ActionList {
        (0..WIDTH)
            .filter(|&column| self.is_empty_cell(column))
            .map(|column| ActionId::new(column as u16))
            .collect()
    }

    fn apply(&self, action: ActionId) -> Result<Self, ActionError> {
        self.check_action(action)?;

        let column = action.index();
        let row = self
            .landing_row(column)
            .ok_or(ActionError::Illegal { action })?;

        let mut placed = self.own;
        placed[column + row * WIDTH] = 1;

        Ok(Self {
            own: self.opponent,
            opponent: placed,
        })
    }

    fn is_first_player(&self) -> bool {
        Self::piece_count(&self.own) == Self::piece_count(&self.opponent)
    }

    fn feature_planes(&self) -> EncodedState {
        ConnectFourEncoder.encode(self)
    }

    fn render(&self) -> String {
        let (own_mark, opponent_mark) = if self.is_first_player() {
            ('o', 'x')
        } else {
            ('x', 'o')
        };

        let mut out = String::with_capacity(CELLS + HEIGHT);
        for i in 0..CELLS {
            out.push(if self.own[i] == 1 {
                own_mark
            } else if self.opponent[i] == 1 {
                opponent_mark
            } else {
                '-'
            });
            if i % WIDTH == WIDTH - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl std::fmt::Display for ConnectFourState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Serde for cell arrays longer than serde's built-in array support.
mod cells_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CELLS;

    pub fn serialize<S: Serializer>(cells: &[u8; CELLS], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(cells.iter())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; CELLS], D::Error> {
        let cells = Vec::<u8>::deserialize(deserializer)?;
        let len = cells.len();
        cells
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"42 cells"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(actions: &[u16]) -> ConnectFourState {
        actions.iter().fold(ConnectFourState::new(), |state, &a| {
            state.apply(ActionId::new(a)).unwrap()
        })
    }

    #[test]
    fn test_initial_state() {
        let state = ConnectFourState::new();

        assert_eq!(state.occupied(), 0);
        assert!(state.is_first_player());
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), WIDTH);
        assert_eq!(state.action_space_size(), 7);
    }

    #[test]
    fn test_gravity() {
        let state = play(&[3]);

        // The mover's mark is now in the opponent array, on the bottom row.
        assert_eq!(state.opponent_cells()[3 + 5 * WIDTH], 1);
        assert_eq!(state.landing_row(3), Some(4));
        assert_eq!(state.landing_row(0), Some(5));
        assert!(!state.is_first_player());
    }

    #[test]
    fn test_apply_does_not_mutate_receiver() {
        let state = play(&[2, 4]);
        let before = state;

        let next = state.apply(ActionId::new(2)).unwrap();

        assert_eq!(state, before);
        assert_ne!(next, state);
        assert_eq!(next.occupied(), state.occupied() + 1);
    }

    #[test]
    fn test_full_column_is_not_legal() {
        let state = play(&[0, 0, 0, 0, 0, 0]);

        assert_eq!(state.landing_row(0), None);
        assert!(!state.legal_actions().contains(&ActionId::new(0)));
        assert_eq!(
            state.apply(ActionId::new(0)),
            Err(ActionError::Illegal { action: ActionId::new(0) })
        );
    }

    #[test]
    fn test_out_of_range_action() {
        let state = ConnectFourState::new();
        assert_eq!(
            state.apply(ActionId::new(7)),
            Err(ActionError::OutOfRange {
                action: ActionId::new(7),
                action_space: 7,
            })
        );
    }

    #[test]
    fn test_vertical_win() {
        let state = play(&[3, 0, 3, 0, 3, 0, 3]);
        assert!(state.is_lost());
        assert!(state.is_terminal());
        assert!(!state.is_draw());
        assert_eq!(state.apply(ActionId::new(1)), Err(ActionError::GameOver));
    }

    #[test]
    fn test_horizontal_win() {
        let state = play(&[0, 0, 1, 1, 2, 2, 3]);
        assert!(state.is_lost());
    }

    #[test]
    fn test_diagonal_wins() {
        // Rising to the right: (0,5) (1,4) (2,3) (3,2).
        let rising = play(&[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        assert!(rising.is_lost());

        // Falling to the right: (3,5) (2,4) (1,3) (0,2).
        let falling = play(&[3, 2, 2, 1, 1, 0, 1, 0, 0, 6, 0]);
        assert!(falling.is_lost());
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let state = play(&[3, 0, 3, 0, 3]);
        assert!(!state.is_lost());
    }

    #[test]
    fn test_render() {
        let state = play(&[3, 4]);
        let rendered = state.render();
        let rows: Vec<&str> = rendered.lines().collect();

        assert_eq!(rows.len(), HEIGHT);
        assert_eq!(rows[0], "-------");
        assert_eq!(rows[5], "---ox--");
    }

    #[test]
    fn test_render_second_player_to_move() {
        let state = play(&[3]);
        assert_eq!(state.render().lines().last(), Some("---o---"));
    }

    #[test]
    fn test_from_cells_validation() {
        let mut own = [0u8; CELLS];
        let mut opponent = [0u8; CELLS];
        own[0] = 1;
        opponent[0] = 1;
        assert_eq!(
            ConnectFourState::from_cells(own, opponent),
            Err(ActionError::SquareConflict { square: 0 })
        );

        opponent[0] = 0;
        own[1] = 2;
        assert_eq!(
            ConnectFourState::from_cells(own, opponent),
            Err(ActionError::InvalidPiece { tag: 2 })
        );
    }

    #[test]
    fn test_from_cells_rejects_unbalanced_marks() {
        let mut own = [0u8; CELLS];
        own[35] = 1;
        own[36] = 1;
        assert_eq!(
            ConnectFourState::from_cells(own, [0; CELLS]),
            Err(ActionError::UnbalancedMarks { own: 2, opponent: 0 })
        );

        // Opponent two marks ahead.
        assert_eq!(
            ConnectFourState::from_cells([0; CELLS], own),
            Err(ActionError::UnbalancedMarks { own: 0, opponent: 2 })
        );
    }

    #[test]
    fn test_from_cells_turn_alternates() {
        let mut opponent = [0u8; CELLS];
        opponent[38] = 1;
        let state = ConnectFourState::from_cells([0; CELLS], opponent).unwrap();
        assert!(!state.is_first_player());

        let next = state.apply(ActionId::new(3)).unwrap();
        assert!(next.is_first_player());
        assert!(!next.apply(ActionId::new(4)).unwrap().is_first_player());
    }

    #[test]
    fn test_serialization() {
        let state = play(&[3, 2, 4]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: ConnectFourState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
