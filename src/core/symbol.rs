//! Input symbols.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// One discrete unit of input.
///
/// The engine makes no assumption about encoding: a `char` is any Unicode
/// scalar value and a `u8` is any byte.
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl Symbol for char {}

impl Symbol for u8 {}
