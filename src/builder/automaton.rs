//! Mutable definition of a deterministic finite automaton.

use crate::builder::blueprint::Blueprint;
use crate::builder::error::{BuildError, TransitionEnd, ValidationError};
use crate::core::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A deterministic finite automaton definition.
///
/// States, symbols and transitions are registered one at a time. Every
/// transition must reference states and symbols that were registered
/// before it, and each `(state, symbol)` pair may be bound at most once, so
/// determinism holds by construction. Totality is not required: a state may
/// lack an edge for some symbol, which only matters if a run reaches it.
///
/// # Example
///
/// ```rust
/// use dfa_engine::Automaton;
///
/// let mut parity = Automaton::new("even".to_string());
/// parity.add_state("even".to_string(), true);
/// parity.add_state("odd".to_string(), false);
/// parity.add_symbol('1');
/// parity.add_transition("even".to_string(), '1', "odd".to_string()).unwrap();
/// parity.add_transition("odd".to_string(), '1', "even".to_string()).unwrap();
///
/// assert!(parity.validate().is_ok());
/// assert_eq!(parity.process("111").unwrap(), "odd");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", try_from = "Blueprint<S, Y>", into = "Blueprint<S, Y>")]
pub struct Automaton<S: State, Y: Symbol> {
    pub(crate) start: S,
    pub(crate) states: HashSet<S>,
    pub(crate) finals: HashSet<S>,
    pub(crate) alphabet: HashSet<Y>,
    pub(crate) transitions: HashMap<S, HashMap<Y, S>>,
}

impl<S: State, Y: Symbol> Automaton<S, Y> {
    /// Create an automaton whose only state is `start`.
    pub fn new(start: S) -> Self {
        let mut automaton = Self::unregistered(start.clone());
        automaton.states.insert(start);
        automaton
    }

    /// An automaton whose start state has not been registered yet.
    pub(crate) fn unregistered(start: S) -> Self {
        Self {
            start,
            states: HashSet::new(),
            finals: HashSet::new(),
            alphabet: HashSet::new(),
            transitions: HashMap::new(),
        }
    }

    /// Register a state, marking it accepting when `is_final` is set.
    ///
    /// Re-registering a state keeps its transitions and never clears an
    /// earlier final mark.
    pub fn add_state(&mut self, state: S, is_final: bool) {
        if is_final {
            self.finals.insert(state.clone());
        }
        self.states.insert(state);
    }

    /// Register an input symbol.
    pub fn add_symbol(&mut self, symbol: Y) {
        self.alphabet.insert(symbol);
    }

    /// Bind `(from, symbol)` to `to`.
    ///
    /// Fails without registering anything if either state or the symbol is
    /// unknown, or if `(from, symbol)` is already bound, even to the same
    /// target.
    pub fn add_transition(&mut self, from: S, symbol: Y, to: S) -> Result<(), BuildError<S, Y>> {
        let result = self.bind(from, symbol, to);
        if let Err(err) = &result {
            tracing::debug!(error = %err, "transition rejected");
        }
        result
    }

    fn bind(&mut self, from: S, symbol: Y, to: S) -> Result<(), BuildError<S, Y>> {
        if !self.states.contains(&from) {
            return Err(BuildError::UndefinedState {
                state: from,
                end: TransitionEnd::Source,
            });
        }
        if !self.states.contains(&to) {
            return Err(BuildError::UndefinedState {
                state: to,
                end: TransitionEnd::Target,
            });
        }
        if !self.alphabet.contains(&symbol) {
            return Err(BuildError::UndefinedSymbol { symbol });
        }

        match self.transitions.entry(from.clone()).or_default().entry(symbol) {
            Entry::Occupied(existing) => Err(BuildError::DuplicateTransition {
                from,
                symbol: existing.key().clone(),
                existing: existing.get().clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(to);
                Ok(())
            }
        }
    }

    /// Register a state (fluent form of [`add_state`](Self::add_state)).
    pub fn with_state(mut self, state: S, is_final: bool) -> Self {
        self.add_state(state, is_final);
        self
    }

    /// Register an accepting state.
    pub fn with_final(self, state: S) -> Self {
        self.with_state(state, true)
    }

    /// Register several symbols at once.
    pub fn with_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = Y>,
    {
        for symbol in symbols {
            self.add_symbol(symbol);
        }
        self
    }

    /// Bind a transition (fluent form of [`add_transition`](Self::add_transition)).
    pub fn with_transition(mut self, from: S, symbol: Y, to: S) -> Result<Self, BuildError<S, Y>> {
        self.add_transition(from, symbol, to)?;
        Ok(self)
    }

    /// Check that the automaton can be run.
    ///
    /// Reports the first problem found, checking states, then the alphabet,
    /// then the start state. Missing edges are not a validation failure.
    pub fn validate(&self) -> Result<(), ValidationError<S>> {
        if self.states.is_empty() {
            return Err(ValidationError::NoStates);
        }
        if self.alphabet.is_empty() {
            return Err(ValidationError::EmptyAlphabet);
        }
        if !self.states.contains(&self.start) {
            return Err(ValidationError::StartNotInStates {
                start: self.start.clone(),
            });
        }
        Ok(())
    }

    /// Check every structural requirement, accumulating ALL failures.
    ///
    /// Same checks as [`validate`](Self::validate), but a definition that is
    /// broken in several ways reports each problem in one pass.
    pub fn diagnose(&self) -> Validation<(), NonEmptyVec<ValidationError<S>>> {
        let has_states = if self.states.is_empty() {
            Validation::fail(ValidationError::NoStates)
        } else {
            Validation::success(())
        };

        let has_alphabet = if self.alphabet.is_empty() {
            Validation::fail(ValidationError::EmptyAlphabet)
        } else {
            Validation::success(())
        };

        let start_known = if self.states.contains(&self.start) {
            Validation::success(())
        } else {
            Validation::fail(ValidationError::StartNotInStates {
                start: self.start.clone(),
            })
        };

        let checks: Vec<Validation<(), NonEmptyVec<ValidationError<S>>>> =
            vec![has_states, has_alphabet, start_known];

        Validation::all_vec(checks).map(|_| ())
    }

    /// The state every run begins in.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// Whether `state` is registered as accepting.
    pub fn is_final(&self, state: &S) -> bool {
        self.finals.contains(state)
    }

    /// Whether `state` has been registered.
    pub fn has_state(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Whether `symbol` is in the alphabet.
    pub fn has_symbol(&self, symbol: &Y) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Registered states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.states.iter()
    }

    /// Registered symbols, in no particular order.
    pub fn alphabet(&self) -> impl Iterator<Item = &Y> {
        self.alphabet.iter()
    }

    /// The state `(from, symbol)` leads to, if that edge exists.
    pub fn target(&self, from: &S, symbol: &Y) -> Option<&S> {
        self.transitions.get(from)?.get(symbol)
    }

    /// Number of registered edges.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }
}
