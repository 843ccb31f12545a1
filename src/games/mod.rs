//! Game implementations.
//!
//! Each game is an independent `BoardState` implementation. `AnyState` wraps
//! either one so a driver can hold a game chosen at runtime without being
//! generic over it.

pub mod connect_four;
pub mod simple_shogi;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{ActionError, ActionId, ActionList};
use crate::nn::EncodedState;
use crate::rules::BoardState;

use connect_four::ConnectFourState;
use simple_shogi::SimpleShogiState;

/// Which game to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKind {
    ConnectFour,
    SimpleShogi,
}

impl GameKind {
    /// All supported games.
    pub const ALL: [GameKind; 2] = [GameKind::ConnectFour, GameKind::SimpleShogi];

    /// The game's initial position.
    #[must_use]
    pub fn initial_state(self) -> AnyState {
        match self {
            GameKind::ConnectFour => AnyState::ConnectFour(ConnectFourState::new()),
            GameKind::SimpleShogi => AnyState::SimpleShogi(SimpleShogiState::new()),
        }
    }

    /// Name used in configs and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GameKind::ConnectFour => "connect_four",
            GameKind::SimpleShogi => "simple_shogi",
        }
    }
}

impl FromStr for GameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown game '{}'", s))
    }
}

/// A position in either game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyState {
    ConnectFour(ConnectFourState),
    SimpleShogi(SimpleShogiState),
}

impl AnyState {
    /// Which game this position belongs to.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            AnyState::ConnectFour(_) => GameKind::ConnectFour,
            AnyState::SimpleShogi(_) => GameKind::SimpleShogi,
        }
    }
}

impl From<ConnectFourState> for AnyState {
    fn from(state: ConnectFourState) -> Self {
        AnyState::ConnectFour(state)
    }
}

impl From<SimpleShogiState> for AnyState {
    fn from(state: SimpleShogiState) -> Self {
        AnyState::SimpleShogi(state)
    }
}

macro_rules! delegate {
    ($self:expr, $state:ident => $body:expr) => {
        match $self {
            AnyState::ConnectFour($state) => $body,
            AnyState::SimpleShogi($state) => $body,
        }
    };
}

impl BoardState for AnyState {
    fn name(&self) -> &'static str {
        delegate!(self, s => s.name())
    }

    fn action_space_size(&self) -> usize {
        delegate!(self, s => s.action_space_size())
    }

    fn is_lost(&self) -> bool {
        delegate!(self, s => s.is_lost())
    }

    fn is_draw(&self) -> bool {
        delegate!(self, s => s.is_draw())
    }

    fn legal_actions(&self) -> ActionList {
        delegate!(self, s => s.legal_actions())
    }

    fn apply(&self, action: ActionId) -> Result<Self, ActionError> {
        match self {
            AnyState::ConnectFour(s) => s.apply(action).map(AnyState::ConnectFour),
            AnyState::SimpleShogi(s) => s.apply(action).map(AnyState::SimpleShogi),
        }
    }

    fn is_first_player(&self) -> bool {
        delegate!(self, s => s.is_first_player())
    }

    fn feature_planes(&self) -> EncodedState {
        delegate!(self, s => s.feature_planes())
    }

    fn render(&self) -> String {
        delegate!(self, s => s.render())
    }
}

impl std::fmt::Display for AnyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
