//! A deterministic finite automaton engine.
//!
//! Definitions are assembled with a builder that enforces determinism as
//! transitions are registered, then executed any number of times by
//! caller-owned cursors. Failures are typed values that carry the offending
//! symbol, its position and, where relevant, the state the run was in.
//!
//! # Core Concepts
//!
//! - **State** / **Symbol**: opaque, comparable labels via the `State` and
//!   `Symbol` traits
//! - **Automaton**: states, accepting states, alphabet, start state and a
//!   partial, deterministic transition function
//! - **Runner**: one run's cursor; the automaton itself never changes
//!   while running
//!
//! # Example
//!
//! ```rust
//! use dfa_engine::{state_enum, Automaton, RunError, StepError};
//!
//! state_enum! {
//!     enum Parity {
//!         Even,
//!         Odd,
//!     }
//! }
//!
//! let automaton = Automaton::new(Parity::Even)
//!     .with_final(Parity::Even)
//!     .with_state(Parity::Odd, false)
//!     .with_symbols(['0', '1'])
//!     .with_transition(Parity::Even, '0', Parity::Even)?
//!     .with_transition(Parity::Even, '1', Parity::Odd)?
//!     .with_transition(Parity::Odd, '0', Parity::Odd)?
//!     .with_transition(Parity::Odd, '1', Parity::Even)?;
//!
//! assert_eq!(automaton.process("1011"), Ok(Parity::Odd));
//! assert_eq!(automaton.accepts("11".chars()), Ok(true));
//! assert_eq!(
//!     automaton.process("1 1"),
//!     Err(RunError::Step(StepError::InvalidSymbol { symbol: ' ', position: 1 }))
//! );
//! # Ok::<(), dfa_engine::BuildError<Parity, char>>(())
//! ```

pub mod builder;
pub mod core;
pub mod modthree;
pub mod runtime;

// Re-export commonly used types
pub use builder::{Automaton, Blueprint, BuildError, TransitionEnd, ValidationError};
pub use self::core::{State, Symbol};
pub use runtime::{RunError, Runner, StepError, Trace};
