//! Baseline drivers for playing whole games.
//!
//! The search and the evaluator live outside this crate. What is here is the
//! uniform-random baseline opponent, plus a policy-sampling player for quick
//! sanity checks of a trained evaluator.

pub mod self_play;

pub use self_play::{
    play_game, play_random_game, play_random_games, random_action, GameRecord, MatchSummary,
    Player, PolicyPlayer, RandomPlayer, SelfPlayConfig,
};
