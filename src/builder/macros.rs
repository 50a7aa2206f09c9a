//! Macros for ergonomic state set declaration.

/// Declare a state enum together with its `StateId` implementation.
///
/// Variants are indexed in declaration order.
///
/// # Example
///
/// ```
/// use warden::core::StateId;
/// use warden::state_enum;
///
/// state_enum! {
///     pub enum GuardState {
///         Sleep,
///         Watch,
///         Chase,
///     }
/// }
///
/// assert_eq!(GuardState::count(), 3);
/// assert_eq!(GuardState::Chase.name(), "Chase");
/// assert_eq!(GuardState::from_index(1), Some(GuardState::Watch));
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
            PartialOrd,
            Ord,
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

        impl $crate::core::StateId for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
