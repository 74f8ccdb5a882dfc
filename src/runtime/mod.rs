//! Execution layer: walking an automaton over input symbols.
//!
//! # Key Concepts
//!
//! - **Runner**: a caller-owned cursor over a shared, read-only automaton
//! - **Fail-fast**: a run stops at the first symbol it cannot consume and
//!   reports that symbol's position
//! - **Trace**: optional record of every step a run took

mod error;
mod runner;
mod trace;

pub use error::{RunError, StepError};
pub use runner::Runner;
pub use trace::{StepRecord, Trace};
