//! Definition layer: registering states, symbols and transitions.
//!
//! The builder rejects malformed definitions as early as possible. Unknown
//! references and duplicate edges fail at registration time; structural
//! completeness (states, alphabet, start) is checked by `validate`.

pub mod automaton;
pub mod blueprint;
pub mod error;
pub mod macros;

pub use automaton::Automaton;
pub use blueprint::{Blueprint, TransitionRecord};
pub use error::{BuildError, TransitionEnd, ValidationError};
