//! Integration tests for baseline play over both games.

use rust_duel::games::{AnyState, GameKind};
use rust_duel::nn::{ConnectFourEncoder, SimpleShogiEncoder, StateEncoder, UniformPolicyZeroValue};
use rust_duel::training::{
    play_game, play_random_game, play_random_games, PolicyPlayer, RandomPlayer, SelfPlayConfig,
};
use rust_duel::{BoardState, GameRng};

#[test]
fn test_random_games_for_every_kind() {
    let config = SelfPlayConfig::default();
    let mut rng = GameRng::new(config.seed);

    for kind in GameKind::ALL {
        for _ in 0..10 {
            let record = play_random_game(kind.initial_state(), &config, &mut rng).unwrap();
            assert!(record.result.is_some(), "{} game unfinished", kind.name());
            assert_eq!(record.game, kind.name());

            let replayed = record.replay(kind.initial_state()).unwrap();
            assert_eq!(replayed.outcome(), record.result);
        }
    }
}

#[test]
fn test_shogi_games_stop_at_ply_cap() {
    let summary = play_random_games(
        &GameKind::SimpleShogi.initial_state(),
        25,
        &SelfPlayConfig::default().with_seed(11),
    )
    .unwrap();

    assert_eq!(summary.games(), 25);
    assert_eq!(summary.unfinished, 0);
}

#[test]
fn test_policy_player_against_random() {
    let config = SelfPlayConfig::default().with_record_features(true);
    let mut rng = GameRng::new(3);
    let initial = GameKind::ConnectFour.initial_state();

    let mut policy = PolicyPlayer::new(UniformPolicyZeroValue::new(initial.action_space_size()));
    let record = play_game(initial, &mut policy, &mut RandomPlayer, &config, &mut rng).unwrap();

    assert!(record.result.is_some());
    assert_eq!(record.features.len(), record.plies());
}

#[test]
fn test_recorded_features_match_encoders() {
    let config = SelfPlayConfig::default().with_record_features(true);

    let record = play_random_game(GameKind::ConnectFour.initial_state(), &config, &mut GameRng::new(1))
        .unwrap();
    assert_eq!(record.features[0].shape, ConnectFourEncoder.output_shape());

    let record = play_random_game(GameKind::SimpleShogi.initial_state(), &config, &mut GameRng::new(1))
        .unwrap();
    assert_eq!(record.features[0].shape, SimpleShogiEncoder.output_shape());
}

#[test]
fn test_record_serializes() {
    let record = play_random_game(
        AnyState::from(rust_duel::SimpleShogiState::new()),
        &SelfPlayConfig::default().with_max_plies(20),
        &mut GameRng::new(8),
    )
    .unwrap();

    let json = serde_json::to_string(&record).unwrap();
    let back: rust_duel::GameRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);
}
