//! Core vocabulary shared by the definition and execution layers.
//!
//! - `State`: opaque, comparable labels for automaton states
//! - `Symbol`: opaque, comparable units of input

mod state;
mod symbol;

pub use state::State;
pub use symbol::Symbol;
