//! Property tests over random play.

use proptest::prelude::*;

use rust_duel::games::simple_shogi::{decode_action, encode_action, Piece, SQUARES};
use rust_duel::training::random_action;
use rust_duel::{ActionError, ActionId, BoardState, ConnectFourState, GameRng, SimpleShogiState};

/// Play up to `plies` random plies, checking `check` on every state reached.
fn random_walk<S: BoardState>(initial: S, seed: u64, plies: usize, mut check: impl FnMut(&S)) -> S {
    let mut rng = GameRng::new(seed);
    let mut state = initial;
    check(&state);
    for _ in 0..plies {
        let Some(action) = random_action(&state, &mut rng) else {
            break;
        };
        state = state.apply(action).unwrap();
        check(&state);
    }
    state
}

fn shogi_total(state: &SimpleShogiState, piece: Piece) -> usize {
    let count = |pieces: &[u8; 15]| pieces[..SQUARES].iter().filter(|&&c| c == piece.tag()).count();
    count(state.own_pieces())
        + count(state.opponent_pieces())
        + state.hand_count(piece) as usize
        + state.opponent_hand_count(piece) as usize
}

/// Every legal action of a live state applies and flips the side to move;
/// a finished state accepts nothing.
fn check_successors<S: BoardState>(state: &S) {
    if state.is_terminal() {
        for action in 0..state.action_space_size() as u16 {
            assert_eq!(
                state.apply(ActionId::new(action)).err(),
                Some(ActionError::GameOver)
            );
        }
        return;
    }
    for action in state.legal_actions() {
        let next = state.apply(action).unwrap();
        assert_ne!(next.is_first_player(), state.is_first_player());
    }
}

/// A copy of a state yields the same actions and the same successors.
fn check_deterministic<S: BoardState + PartialEq + std::fmt::Debug>(state: &S) {
    let copy = state.clone();
    assert_eq!(state.legal_actions(), copy.legal_actions());
    for action in state.legal_actions() {
        assert_eq!(state.apply(action), copy.apply(action));
    }
}

proptest! {
    #[test]
    fn codec_round_trips(square in 0usize..12, descriptor in 0usize..11) {
        let action = encode_action(square, descriptor).unwrap();
        prop_assert!(action.index() < 132);
        prop_assert_eq!(decode_action(action).unwrap(), (square, descriptor));
    }

    #[test]
    fn codec_rejects_out_of_range(action in 132u16..) {
        prop_assert!(decode_action(ActionId::new(action)).is_err());
    }

    #[test]
    fn connect_four_legal_actions_empty_only_when_terminal(seed in any::<u64>()) {
        random_walk(ConnectFourState::new(), seed, 42, |s| {
            assert!(!s.legal_actions().is_empty() || s.is_terminal());
        });
    }

    #[test]
    fn legal_actions_all_apply(seed in any::<u64>()) {
        random_walk(ConnectFourState::new(), seed, 42, check_successors);
        random_walk(SimpleShogiState::new(), seed, 300, |s| {
            check_successors(s);
            if !s.is_terminal() {
                for action in s.legal_actions() {
                    assert_eq!(s.apply(action).unwrap().ply_depth(), s.ply_depth() + 1);
                }
            }
        });
    }

    #[test]
    fn random_games_terminate(seed in any::<u64>()) {
        let c4 = random_walk(ConnectFourState::new(), seed, 42, |_| {});
        prop_assert!(c4.is_terminal());

        let shogi = random_walk(SimpleShogiState::new(), seed, 300, |_| {});
        prop_assert!(shogi.is_terminal());
    }

    #[test]
    fn shogi_pieces_are_conserved(seed in any::<u64>()) {
        random_walk(SimpleShogiState::new(), seed, 300, |s| {
            for piece in Piece::DROPPABLE {
                assert_eq!(shogi_total(s, piece), 2);
            }
            assert!(shogi_total(s, Piece::Lion) <= 2);
        });
    }

    #[test]
    fn legal_actions_are_deterministic(seed in any::<u64>(), plies in 0usize..40) {
        check_deterministic(&random_walk(ConnectFourState::new(), seed, plies, |_| {}));
        check_deterministic(&random_walk(SimpleShogiState::new(), seed, plies, |_| {}));
    }

    #[test]
    fn perspective_alternates(seed in any::<u64>()) {
        let mut expected_first = true;
        random_walk(ConnectFourState::new(), seed, 42, |s| {
            assert_eq!(s.is_first_player(), expected_first);
            expected_first = !expected_first;
        });
    }
}
