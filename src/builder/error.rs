//! Errors raised while defining and validating an automaton.

use crate::core::{State, Symbol};
use std::fmt;
use thiserror::Error;

/// Which end of a transition referenced an unknown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEnd {
    Source,
    Target,
}

impl fmt::Display for TransitionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Errors that can occur when registering a transition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<S: State, Y: Symbol> {
    #[error("{end} state {state:?} is not defined. Call .add_state() first")]
    UndefinedState { state: S, end: TransitionEnd },

    #[error("symbol {symbol:?} is not in the alphabet. Call .add_symbol() first")]
    UndefinedSymbol { symbol: Y },

    #[error("transition from {from:?} on {symbol:?} is already defined (to {existing:?})")]
    DuplicateTransition { from: S, symbol: Y, existing: S },
}

/// Structural problems that make an automaton unrunnable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError<S: State> {
    #[error("no states defined")]
    NoStates,

    #[error("alphabet is empty")]
    EmptyAlphabet,

    #[error("start state {start:?} is not in the set of states")]
    StartNotInStates { start: S },
}
