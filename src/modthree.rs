//! Remainder of a binary number divided by three.
//!
//! The number is read most significant bit first. Each state is the
//! remainder of the prefix read so far, so reading bit `b` in remainder `r`
//! moves to `(2r + b) mod 3`.

use crate::builder::{Automaton, BuildError};
use crate::runtime::RunError;
use crate::state_enum;
use thiserror::Error;

state_enum! {
    /// Remainder of the bits read so far.
    pub enum Remainder {
        Zero,
        One,
        Two,
    }
}

impl Remainder {
    /// The remainder as a number.
    pub fn value(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

/// Errors that can occur while computing a remainder.
#[derive(Debug, Error)]
pub enum ModThreeError {
    #[error("invalid mod-three machine: {0}")]
    Build(#[from] BuildError<Remainder, char>),

    #[error("invalid binary input: {0}")]
    Run(#[from] RunError<Remainder, char>),
}

/// Build the mod-three automaton over the alphabet `{'0', '1'}`.
pub fn build() -> Result<Automaton<Remainder, char>, BuildError<Remainder, char>> {
    use Remainder::{One, Two, Zero};

    Automaton::new(Zero)
        .with_final(Zero)
        .with_final(One)
        .with_final(Two)
        .with_symbols(['0', '1'])
        .with_transition(Zero, '0', Zero)?
        .with_transition(Zero, '1', One)?
        .with_transition(One, '0', Two)?
        .with_transition(One, '1', Zero)?
        .with_transition(Two, '0', One)?
        .with_transition(Two, '1', Two)
}

/// Remainder (0, 1 or 2) of the binary number in `input`.
///
/// Surrounding whitespace is ignored and an empty input is zero.
///
/// # Example
///
/// ```rust
/// use dfa_engine::modthree::mod_three;
///
/// assert_eq!(mod_three("1101").unwrap(), 1); // 13
/// assert_eq!(mod_three("1110").unwrap(), 2); // 14
/// assert_eq!(mod_three("1111").unwrap(), 0); // 15
/// ```
pub fn mod_three(input: &str) -> Result<u8, ModThreeError> {
    let automaton = build()?;
    let remainder = automaton.process(input)?;
    Ok(remainder.value())
}
