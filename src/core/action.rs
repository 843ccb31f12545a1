//! Action representation: a single integer id.
//!
//! Every game maps its moves onto a bounded range of integers `0..ACTION_SPACE`.
//! The id is the unit the search and the evaluator exchange: the evaluator's
//! policy head is indexed by it and `BoardState::apply` consumes it.
//!
//! Ids are stateless. Whether an id is playable depends only on the state it
//! is applied to, never on where the id came from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A compact action identifier.
///
/// ## Example
///
/// ```
/// use rust_duel::core::ActionId;
///
/// let drop_in_column_three = ActionId::new(3);
/// assert_eq!(drop_in_column_three.index(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub u16);

impl ActionId {
    /// Create a new action id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the id as an index into a policy vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for ActionId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Legal-action list.
///
/// Inline capacity covers the common case for both games (7 columns, and the
/// opening capture-game position) without heap allocation.
pub type ActionList = SmallVec<[ActionId; 16]>;
