//! Serializable description of an automaton definition.
//!
//! A blueprint carries no run state. Turning one back into an
//! [`Automaton`] replays the registration calls, so a corrupted blueprint
//! is rejected with the same [`BuildError`] the builder would raise.

use crate::builder::automaton::Automaton;
use crate::builder::error::BuildError;
use crate::core::{State, Symbol};
use serde::{Deserialize, Serialize};

/// One `(from, symbol) -> to` edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, Y: Symbol> {
    pub from: S,
    pub symbol: Y,
    pub to: S,
}

/// Plain data form of an [`Automaton`].
///
/// `start` is not registered implicitly: it must also appear in `states`
/// (or `finals`) for the resulting automaton to validate. Every entry of
/// `finals` is registered as a state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Blueprint<S: State, Y: Symbol> {
    pub start: S,
    #[serde(default)]
    pub states: Vec<S>,
    #[serde(default)]
    pub finals: Vec<S>,
    #[serde(default)]
    pub alphabet: Vec<Y>,
    #[serde(default)]
    pub transitions: Vec<TransitionRecord<S, Y>>,
}

impl<S: State, Y: Symbol> TryFrom<Blueprint<S, Y>> for Automaton<S, Y> {
    type Error = BuildError<S, Y>;

    fn try_from(blueprint: Blueprint<S, Y>) -> Result<Self, Self::Error> {
        let mut automaton = Automaton::unregistered(blueprint.start);
        for state in blueprint.states {
            automaton.add_state(state, false);
        }
        for state in blueprint.finals {
            automaton.add_state(state, true);
        }
        for symbol in blueprint.alphabet {
            automaton.add_symbol(symbol);
        }
        for edge in blueprint.transitions {
            automaton.add_transition(edge.from, edge.symbol, edge.to)?;
        }
        Ok(automaton)
    }
}

impl<S: State, Y: Symbol> From<Automaton<S, Y>> for Blueprint<S, Y> {
    fn from(automaton: Automaton<S, Y>) -> Self {
        let transitions = automaton
            .transitions
            .into_iter()
            .flat_map(|(from, row)| {
                row.into_iter().map(move |(symbol, to)| TransitionRecord {
                    from: from.clone(),
                    symbol,
                    to,
                })
            })
            .collect();

        Self {
            start: automaton.start,
            states: automaton.states.into_iter().collect(),
            finals: automaton.finals.into_iter().collect(),
            alphabet: automaton.alphabet.into_iter().collect(),
            transitions,
        }
    }
}
