//! Simple shogi state and rules.
//!
//! ## Layout
//!
//! Each side has a 15-slot array: slots 0..12 are the 3x4 board, row-major,
//! seen from that side (row 0 is the far edge, toward the opponent); slots
//! 12..15 count Chicks, Elephants and Giraffes in hand.
//!
//! Both arrays are kept in their owner's frame, so square `p` in one array
//! is square `11 - p` in the other. Applying an action swaps the arrays;
//! nothing is physically rotated.

use serde::{Deserialize, Serialize};

use super::codec::{on_board, MoveKind, ShogiMove, ACTION_SPACE};
use super::piece::Piece;
use crate::core::{ActionError, ActionId, ActionList, Seat};
use crate::nn::{EncodedState, SimpleShogiEncoder, StateEncoder};
use crate::rules::BoardState;

/// Board columns.
pub const COLUMNS: usize = 3;
/// Board rows.
pub const ROWS: usize = 4;
/// Board squares.
pub const SQUARES: usize = COLUMNS * ROWS;
/// Hand slots, one per droppable piece type.
pub const HAND_SLOTS: usize = 3;
/// Slots per side.
pub const SLOTS: usize = SQUARES + HAND_SLOTS;
/// Plies after which the game is drawn.
pub const MAX_PLIES: u32 = 300;
/// Pieces of each droppable type in the game, so the most one hand can hold.
pub const HAND_LIMIT: u8 = 2;

/// Starting array for either side, in its own frame.
const INITIAL: [u8; SLOTS] = [0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 4, 3, 0, 0, 0];

/// The same physical square in the other side's frame.
#[inline]
#[must_use]
pub const fn mirror(square: usize) -> usize {
    SQUARES - 1 - square
}

/// Hand slot for a droppable piece.
#[inline]
const fn hand_slot(piece: Piece) -> usize {
    SQUARES - 1 + piece.tag() as usize
}

/// Simple shogi position from the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimpleShogiState {
    own: [u8; SLOTS],
    opponent: [u8; SLOTS],
    ply_depth: u32,
}

impl SimpleShogiState {
    /// Initial position, first player to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            own: INITIAL,
            opponent: INITIAL,
            ply_depth: 0,
        }
    }

    /// Build a position from raw arrays.
    ///
    /// Board slots must hold valid tags and each hand may hold at most
    /// `HAND_LIMIT` of a piece type. The board is not held to the piece
    /// budget, so test positions may place extra pieces.
    pub fn from_parts(
        own: [u8; SLOTS],
        opponent: [u8; SLOTS],
        ply_depth: u32,
    ) -> Result<Self, ActionError> {
        for square in 0..SQUARES {
            for tag in [own[square], opponent[mirror(square)]] {
                if tag != 0 {
                    Piece::try_from(tag)?;
                }
            }
            if own[square] != 0 && opponent[mirror(square)] != 0 {
                return Err(ActionError::SquareConflict { square });
            }
        }
        for piece in Piece::DROPPABLE {
            for count in [own[hand_slot(piece)], opponent[hand_slot(piece)]] {
                if count > HAND_LIMIT {
                    return Err(ActionError::InvalidHand {
                        tag: piece.tag(),
                        count,
                    });
                }
            }
        }
        Ok(Self {
            own,
            opponent,
            ply_depth,
        })
    }

    /// Array of the side to move, in its own frame.
    #[must_use]
    pub fn own_pieces(&self) -> &[u8; SLOTS] {
        &self.own
    }

    /// Array of the side that just moved, in its own frame.
    #[must_use]
    pub fn opponent_pieces(&self) -> &[u8; SLOTS] {
        &self.opponent
    }

    /// Plies played since the initial position.
    #[must_use]
    pub fn ply_depth(&self) -> u32 {
        self.ply_depth
    }

    /// Piece of the side to move on `square` (mover's frame).
    #[must_use]
    pub fn own_piece(&self, square: usize) -> Option<Piece> {
        self.own.get(square).copied().and_then(Piece::from_cell)
    }

    /// Opponent piece on `square` (mover's frame).
    #[must_use]
    pub fn opponent_piece(&self, square: usize) -> Option<Piece> {
        (square < SQUARES)
            .then(|| Piece::from_cell(self.opponent[mirror(square)]))
            .flatten()
    }

    /// Count of `piece` in the mover's hand.
    #[must_use]
    pub fn hand_count(&self, piece: Piece) -> u8 {
        if piece.is_droppable() {
            self.own[hand_slot(piece)]
        } else {
            0
        }
    }

    /// Count of `piece` in the opponent's hand.
    #[must_use]
    pub fn opponent_hand_count(&self, piece: Piece) -> u8 {
        if piece.is_droppable() {
            self.opponent[hand_slot(piece)]
        } else {
            0
        }
    }

    /// Arrays reordered as (first player, second player), each in its own frame.
    #[must_use]
    pub fn by_seat(&self) -> (&[u8; SLOTS], &[u8; SLOTS]) {
        if self.is_first_player() {
            (&self.own, &self.opponent)
        } else {
            (&self.opponent, &self.own)
        }
    }

    /// Board as the first player sees it: owner and piece per square.
    ///
    /// Display layers draw from this so the board does not flip every ply.
    #[must_use]
    pub fn board_by_seat(&self) -> [Option<(Seat, Piece)>; SQUARES] {
        let (first, second) = self.by_seat();
        std::array::from_fn(|square| {
            Piece::from_cell(first[square])
                .map(|p| (Seat::First, p))
                .or_else(|| Piece::from_cell(second[mirror(square)]).map(|p| (Seat::Second, p)))
        })
    }

    /// Convert a square in the first player's frame to the mover's frame.
    ///
    /// Input layers that draw a fixed board use this before building a
    /// `ShogiMove`.
    #[must_use]
    pub fn display_square(&self, square: usize) -> usize {
        if self.is_first_player() {
            square
        } else {
            mirror(square)
        }
    }

    fn has_lion(&self) -> bool {
        self.own[..SQUARES].contains(&Piece::Lion.tag())
    }

    /// Steps for the mover's piece on `source`.
    fn push_steps(&self, source: usize, piece: Piece, out: &mut ActionList) {
        let (x, y) = ((source % COLUMNS) as i32, (source / COLUMNS) as i32);
        for &direction in piece.directions() {
            let (dx, dy) = direction.delta();
            if let Some(target) = on_board(x + dx, y + dy) {
                if self.own[target] == 0 {
                    out.push(ShogiMove { target, kind: MoveKind::Step(direction) }.encode());
                }
            }
        }
    }

    /// Drops onto `target` for every piece type in hand.
    fn push_drops(&self, target: usize, out: &mut ActionList) {
        for piece in Piece::DROPPABLE {
            if self.own[hand_slot(piece)] != 0 {
                out.push(ShogiMove { target, kind: MoveKind::Drop(piece) }.encode());
            }
        }
    }

    fn generate(&self) -> ActionList {
        let mut actions = ActionList::new();
        for square in 0..SQUARES {
            match Piece::from_cell(self.own[square]) {
                Some(piece) => self.push_steps(square, piece, &mut actions),
                None if self.opponent[mirror(square)] == 0 => {
                    self.push_drops(square, &mut actions)
                }
                None => {}
            }
        }
        actions
    }

    /// Successor arrays after a legal move; perspective not yet flipped.
    fn play(&self, mv: ShogiMove) -> Result<([u8; SLOTS], [u8; SLOTS]), ActionError> {
        let mut own = self.own;
        let mut opponent = self.opponent;
        let target = mv.target;

        match mv.kind {
            MoveKind::Step(_) => {
                let source = mv.source().ok_or(ActionError::Illegal { action: mv.encode() })?;
                own[target] = own[source];
                own[source] = 0;

                if let Some(captured) = Piece::from_cell(opponent[mirror(target)]) {
                    if captured.is_droppable() {
                        own[hand_slot(captured)] += 1;
                    }
                    opponent[mirror(target)] = 0;
                }
            }
            MoveKind::Drop(piece) => {
                own[target] = piece.tag();
                own[hand_slot(piece)] -= 1;
            }
        }
        Ok((own, opponent))
    }
}

impl Default for SimpleShogiState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState for SimpleShogiState {
    fn name(&self) -> &'static str {
        "simple_shogi"
    }

    fn action_space_size(&self) -> usize {
        ACTION_SPACE
    }

    /// The mover's Lion was captured, or the mover has no legal action.
    fn is_lost(&self) -> bool {
        !self.has_lion() || self.generate().is_empty()
    }

    fn is_draw(&self) -> bool {
        self.ply_depth >= MAX_PLIES
    }

    fn legal_actions(&self) -> ActionList {
        self.generate()
    }

    fn apply(&self, action: ActionId) -> Result<Self, ActionError> {
        self.check_action(action)?;
        let mv = ShogiMove::decode(action)?;
        let (own, opponent) = self.play(mv)?;

        if let MoveKind::Drop(piece) = mv.kind {
            tracing::trace!(ply = self.ply_depth, ?piece, target = mv.target, "drop");
        }

        Ok(Self {
            own: opponent,
            opponent: own,
            ply_depth: self.ply_depth + 1,
        })
    }

    fn is_first_player(&self) -> bool {
        self.ply_depth % 2 == 0
    }

    fn feature_planes(&self) -> EncodedState {
        SimpleShogiEncoder.encode(self)
    }

    fn render(&self) -> String {
        let (first, second) = self.by_seat();

        let hand = |pieces: &[u8; SLOTS], seat: Seat| {
            let mut line = String::from("[");
            for piece in Piece::DROPPABLE {
                for _ in 0..pieces[hand_slot(piece)] {
                    line.push(letter(piece, seat));
                }
            }
            line.push_str("]\n");
            line
        };

        let mut out = hand(second, Seat::Second);
        for (square, cell) in self.board_by_seat().iter().enumerate() {
            out.push(match cell {
                Some((seat, piece)) => letter(*piece, *seat),
                None => '-',
            });
            if square % COLUMNS == COLUMNS - 1 {
                out.push('\n');
            }
        }
        out.push_str(&hand(first, Seat::First));
        out
    }
}

fn letter(piece: Piece, seat: Seat) -> char {
    match seat {
        Seat::First => piece.letter(),
        Seat::Second => piece.letter().to_ascii_lowercase(),
    }
}

impl std::fmt::Display for SimpleShogiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
