//! Baseline game drivers.
//!
//! Plays complete games with simple players: uniform random over
//! `legal_actions()`, or sampling from an evaluator's masked policy. These
//! are the reference opponents a trained search is measured against, and a
//! cheap way to exercise the rules engines end to end.

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, ActionId, GameRng, Seat};
use crate::nn::{legal_policy, EncodedState, PolicyValueNetwork};
use crate::rules::{BoardState, GameResult};

/// Configuration for baseline play.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfPlayConfig {
    /// Seed for the game RNG; each game forks its own stream.
    pub seed: u64,

    /// Safety bound on plies per game. Both games end on their own well
    /// before this; hitting it leaves the record without a result.
    pub max_plies: usize,

    /// Keep the encoded state of every position in the record.
    pub record_features: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_plies: 1_000,
            record_features: false,
        }
    }
}

impl SelfPlayConfig {
    /// Create a new self-play config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the ply bound.
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }

    /// Record encoded states.
    pub fn with_record_features(mut self, record: bool) -> Self {
        self.record_features = record;
        self
    }
}

/// Something that picks an action for the side to move.
pub trait Player<S: BoardState> {
    /// Choose a legal action, or `None` if there is none.
    fn select(&mut self, state: &S, rng: &mut GameRng) -> Option<ActionId>;
}

/// Uniformly random legal action.
pub fn random_action<S: BoardState>(state: &S, rng: &mut GameRng) -> Option<ActionId> {
    rng.choose(&state.legal_actions()).copied()
}

/// Plays uniformly at random among legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPlayer;

impl<S: BoardState> Player<S> for RandomPlayer {
    fn select(&mut self, state: &S, rng: &mut GameRng) -> Option<ActionId> {
        random_action(state, rng)
    }
}

/// Samples from an evaluator's policy restricted to legal actions.
///
/// With `greedy` set, always takes the most probable legal action.
pub struct PolicyPlayer<N: PolicyValueNetwork> {
    network: N,
    greedy: bool,
}

impl<N: PolicyValueNetwork> PolicyPlayer<N> {
    /// Sample proportionally to the policy.
    pub fn new(network: N) -> Self {
        Self {
            network,
            greedy: false,
        }
    }

    /// Always play the arg-max legal action.
    pub fn greedy(network: N) -> Self {
        Self {
            network,
            greedy: true,
        }
    }
}

impl<S: BoardState, N: PolicyValueNetwork> Player<S> for PolicyPlayer<N> {
    fn select(&mut self, state: &S, rng: &mut GameRng) -> Option<ActionId> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return None;
        }

        let (policy, _value) = self.network.predict(&state.feature_planes());
        let probs = legal_policy(&policy, &legal);

        let index = if self.greedy {
            probs
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .map(|(i, _)| i)
        } else {
            rng.choose_weighted(&probs)
        };
        index.map(|i| legal[i])
    }
}

/// One finished (or ply-bounded) game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game name, as reported by `BoardState::name`.
    pub game: String,

    /// Seed of the RNG stream that played the game.
    pub seed: u64,

    /// Actions in play order.
    pub actions: Vec<ActionId>,

    /// Encoded position before each action, when recording features.
    pub features: Vec<EncodedState>,

    /// Final result; `None` if the ply bound was reached first.
    pub result: Option<GameResult>,
}

impl GameRecord {
    /// Number of plies played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.actions.len()
    }

    /// Replay the recorded actions from `initial`.
    pub fn replay<S: BoardState>(&self, initial: S) -> Result<S, ActionError> {
        self.actions
            .iter()
            .try_fold(initial, |state, &action| state.apply(action))
    }
}

/// Play one game between two players from `initial`.
///
/// `first` moves from `initial`, then the players alternate.
pub fn play_game<S, A, B>(
    initial: S,
    first: &mut A,
    second: &mut B,
    config: &SelfPlayConfig,
    rng: &mut GameRng,
) -> Result<GameRecord, ActionError>
where
    S: BoardState,
    A: Player<S>,
    B: Player<S>,
{
    let mut rng = rng.fork();
    let mut record = GameRecord {
        game: initial.name().to_string(),
        seed: rng.seed(),
        actions: Vec::new(),
        features: Vec::new(),
        result: None,
    };

    let mut state = initial;
    while !state.is_terminal() && record.plies() < config.max_plies {
        let choice = if record.plies() % 2 == 0 {
            first.select(&state, &mut rng)
        } else {
            second.select(&state, &mut rng)
        };
        let Some(action) = choice else {
            break;
        };

        if config.record_features {
            record.features.push(state.feature_planes());
        }
        tracing::trace!(game = %record.game, ply = record.plies(), %action, "move");

        state = state.apply(action)?;
        record.actions.push(action);
    }

    record.result = state.outcome();
    tracing::debug!(
        game = %record.game,
        seed = record.seed,
        plies = record.plies(),
        result = ?record.result,
        "game finished"
    );
    Ok(record)
}

/// Play one game with both sides choosing uniformly at random.
pub fn play_random_game<S: BoardState>(
    initial: S,
    config: &SelfPlayConfig,
    rng: &mut GameRng,
) -> Result<GameRecord, ActionError> {
    play_game(initial, &mut RandomPlayer, &mut RandomPlayer, config, rng)
}

/// Tally of results over a batch of games.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    /// Games stopped by the ply bound.
    pub unfinished: usize,
}

impl MatchSummary {
    /// Add one record.
    pub fn record(&mut self, result: Option<GameResult>) {
        match result {
            Some(GameResult::Winner(Seat::First)) => self.first_wins += 1,
            Some(GameResult::Winner(Seat::Second)) => self.second_wins += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }

    /// Games counted.
    #[must_use]
    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws + self.unfinished
    }
}

/// Play `games` random games from `initial`.
pub fn play_random_games<S: BoardState>(
    initial: &S,
    games: usize,
    config: &SelfPlayConfig,
) -> Result<MatchSummary, ActionError> {
    let mut rng = GameRng::new(config.seed);
    let mut summary = MatchSummary::default();
    for _ in 0..games {
        let record = play_random_game(initial.clone(), config, &mut rng)?;
        summary.record(record.result);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect_four::ConnectFourState;
    use crate::games::simple_shogi::SimpleShogiState;
    use crate::nn::UniformPolicyZeroValue;

    #[test]
    fn test_default_config() {
        let config = SelfPlayConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.max_plies, 1_000);
        assert!(!config.record_features);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SelfPlayConfig::new()
            .with_seed(7)
            .with_max_plies(10)
            .with_record_features(true);

        assert_eq!(config.seed, 7);
        assert_eq!(config.max_plies, 10);
        assert!(config.record_features);
    }

    #[test]
    fn test_config_serialization() {
        let config = SelfPlayConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SelfPlayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_random_game_reaches_terminal() {
        let mut rng = GameRng::new(1);
        let record =
            play_random_game(ConnectFourState::new(), &SelfPlayConfig::default(), &mut rng).unwrap();

        assert!(record.result.is_some());
        assert!(record.plies() <= 42);
        assert_eq!(record.game, "connect_four");

        let final_state = record.replay(ConnectFourState::new()).unwrap();
        assert!(final_state.is_terminal());
    }

    #[test]
    fn test_random_game_is_deterministic() {
        let config = SelfPlayConfig::default();
        let a = play_random_game(SimpleShogiState::new(), &config, &mut GameRng::new(5)).unwrap();
        let b = play_random_game(SimpleShogiState::new(), &config, &mut GameRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ply_bound() {
        let config = SelfPlayConfig::default().with_max_plies(3);
        let record =
            play_random_game(SimpleShogiState::new(), &config, &mut GameRng::new(3)).unwrap();

        assert_eq!(record.plies(), 3);
        assert_eq!(record.result, None);
    }

    #[test]
    fn test_record_features() {
        let config = SelfPlayConfig::default().with_record_features(true);
        let record =
            play_random_game(ConnectFourState::new(), &config, &mut GameRng::new(9)).unwrap();

        assert_eq!(record.features.len(), record.plies());
        assert_eq!(record.features[0].shape, vec![2, 6, 7]);
    }

    #[test]
    fn test_policy_player_picks_legal_actions() {
        let mut player = PolicyPlayer::new(UniformPolicyZeroValue::new(132));
        let mut greedy = PolicyPlayer::greedy(UniformPolicyZeroValue::new(132));
        let state = SimpleShogiState::new();
        let mut rng = GameRng::new(0);

        for _ in 0..10 {
            let action = player.select(&state, &mut rng).unwrap();
            assert!(state.is_legal(action));
        }
        let action = greedy.select(&state, &mut rng).unwrap();
        assert!(state.is_legal(action));
    }

    #[test]
    fn test_match_summary() {
        let summary =
            play_random_games(&ConnectFourState::new(), 20, &SelfPlayConfig::default()).unwrap();

        assert_eq!(summary.games(), 20);
        assert_eq!(summary.unfinished, 0);
    }

    #[test]
    fn test_match_summary_counts_by_seat() {
        let mut summary = MatchSummary::default();
        summary.record(Some(GameResult::Winner(Seat::First)));
        summary.record(Some(GameResult::Winner(Seat::Second)));
        summary.record(Some(GameResult::Winner(Seat::Second)));
        summary.record(Some(GameResult::Draw));
        summary.record(None);

        assert_eq!(summary.first_wins, 1);
        assert_eq!(summary.second_wins, 2);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.unfinished, 1);
        assert_eq!(summary.games(), 5);
    }
}
