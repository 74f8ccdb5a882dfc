//! Macros for ergonomic automaton construction.

/// Generate a plain enum that implements [`State`](crate::core::State).
///
/// Finality is not part of the enum: it is declared per automaton with
/// `add_state(state, true)`.
///
/// # Example
///
/// ```
/// use dfa_engine::state_enum;
/// use dfa_engine::core::State;
///
/// state_enum! {
///     pub enum Light {
///         Red,
///         Green,
///         Amber,
///     }
/// }
///
/// assert_eq!(Light::Amber.name(), "Amber");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
