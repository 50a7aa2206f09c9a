//! State identifiers for frame-driven state machines.
//!
//! A state set is closed and contiguous: every value appears exactly once in
//! [`StateId::ALL`], and its position there is its index.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the identifiers of a closed set of states.
///
/// Identifiers are plain tags. Behaviour lives in the callbacks registered
/// against them, never in the tag itself.
///
/// # Required Traits
///
/// - `Copy` + `Ord` + `Hash`: identifiers key the callback table
/// - `Debug`: identifiers show up in logs and errors
/// - `Serialize` + `Deserialize`: identifiers are stored in checkpoints
///
/// # Example
///
/// ```rust
/// use warden::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
/// enum Guard {
///     Sleep,
///     Watch,
/// }
///
/// impl StateId for Guard {
///     const ALL: &'static [Self] = &[Self::Sleep, Self::Watch];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Sleep => "Sleep",
///             Self::Watch => "Watch",
///         }
///     }
/// }
///
/// assert_eq!(Guard::count(), 2);
/// assert_eq!(Guard::Watch.index(), Some(1));
/// assert_eq!(Guard::from_index(0), Some(Guard::Sleep));
/// ```
pub trait StateId:
    Copy + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every state of the set, in index order.
    const ALL: &'static [Self];

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Number of states in the set.
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Position of this state in [`StateId::ALL`].
    ///
    /// Returns `None` only for an inconsistent `ALL` table that omits the
    /// value.
    fn index(&self) -> Option<usize> {
        Self::ALL.iter().position(|state| state == self)
    }

    /// State at `index`, if the set has one there.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
