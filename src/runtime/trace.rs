//! Step-by-step record of a run.

use crate::core::{State, Symbol};
use serde::{Deserialize, Serialize};

/// Record of a single consumed symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StepRecord<S: State, Y: Symbol> {
    /// The state the symbol was read in
    pub from: S,
    /// The symbol consumed
    pub symbol: Y,
    /// The state the edge led to
    pub to: S,
    /// Index of the symbol within the run
    pub position: usize,
}

/// Ordered trace of a completed run.
///
/// # Example
///
/// ```rust
/// use dfa_engine::Automaton;
///
/// let automaton = Automaton::new("a".to_string())
///     .with_state("b".to_string(), true)
///     .with_symbols(['x'])
///     .with_transition("a".to_string(), 'x', "b".to_string())
///     .unwrap();
///
/// let trace = automaton.trace("x".chars()).unwrap();
/// assert_eq!(trace.len(), 1);
/// assert_eq!(trace.path(), vec!["a", "b"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Trace<S: State, Y: Symbol> {
    start: S,
    steps: Vec<StepRecord<S, Y>>,
}

impl<S: State, Y: Symbol> Trace<S, Y> {
    /// Create an empty trace for a run beginning at `start`.
    pub fn new(start: S) -> Self {
        Self {
            start,
            steps: Vec::new(),
        }
    }

    /// Append a step, returning the extended trace.
    pub fn record(mut self, step: StepRecord<S, Y>) -> Self {
        self.steps.push(step);
        self
    }

    /// The state the run began in.
    pub fn start(&self) -> &S {
        &self.start
    }

    /// The state the run ended in.
    pub fn end(&self) -> &S {
        self.steps.last().map_or(&self.start, |step| &step.to)
    }

    /// States visited in order: the start, then each step's target.
    pub fn path(&self) -> Vec<&S> {
        std::iter::once(&self.start)
            .chain(self.steps.iter().map(|step| &step.to))
            .collect()
    }

    /// All recorded steps.
    pub fn steps(&self) -> &[StepRecord<S, Y>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
