//! Core State trait for automaton states.
//!
//! States are opaque labels. The engine only ever compares and hashes them;
//! whether a state is accepting is a property of the automaton it is
//! registered in, not of the state value itself.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the cursor, traces and errors
/// - `Eq` + `Hash`: states key the transition table
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: definitions can be snapshotted
///
/// # Example
///
/// ```rust
/// use dfa_engine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}
