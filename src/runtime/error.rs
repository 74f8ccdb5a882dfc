//! Errors raised while running an automaton.

use crate::builder::ValidationError;
use crate::core::{State, Symbol};
use thiserror::Error;

/// Errors that can occur when consuming a single symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError<S: State, Y: Symbol> {
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: Y, position: usize },

    #[error("no transition from {state:?} on {symbol:?} at position {position}")]
    NoTransition {
        state: S,
        symbol: Y,
        position: usize,
    },
}

impl<S: State, Y: Symbol> StepError<S, Y> {
    /// Index of the symbol that could not be consumed.
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidSymbol { position, .. } | Self::NoTransition { position, .. } => *position,
        }
    }

    /// The symbol that could not be consumed.
    pub fn symbol(&self) -> &Y {
        match self {
            Self::InvalidSymbol { symbol, .. } | Self::NoTransition { symbol, .. } => symbol,
        }
    }
}

/// Errors that can occur during a full run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError<S: State, Y: Symbol> {
    #[error(transparent)]
    Invalid(#[from] ValidationError<S>),

    #[error(transparent)]
    Step(#[from] StepError<S, Y>),
}

impl<S: State, Y: Symbol> RunError<S, Y> {
    /// Position of the failing symbol, if the run got as far as stepping.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Invalid(_) => None,
            Self::Step(err) => Some(err.position()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_error_exposes_position_and_symbol() {
        let err: StepError<String, char> = StepError::NoTransition {
            state: "S1".to_string(),
            symbol: '0',
            position: 4,
        };
        assert_eq!(err.position(), 4);
        assert_eq!(err.symbol(), &'0');
        assert_eq!(
            err.to_string(),
            "no transition from \"S1\" on '0' at position 4"
        );
    }

    #[test]
    fn run_error_wraps_both_kinds() {
        let invalid: RunError<String, char> = ValidationError::EmptyAlphabet.into();
        assert_eq!(invalid.position(), None);
        assert_eq!(invalid.to_string(), "alphabet is empty");

        let step: RunError<String, char> = StepError::InvalidSymbol {
            symbol: ' ',
            position: 1,
        }
        .into();
        assert_eq!(step.position(), Some(1));
        assert_eq!(step.to_string(), "invalid symbol ' ' at position 1");
    }
}
