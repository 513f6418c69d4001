//! Macros for declaring operation catalogues.

/// Generate an operation enum together with its `Operation` implementation.
///
/// Each variant is paired with the display name used in results, history
/// records and error messages. Variants listed under `scientific:` are
/// only available while the session has scientific mode enabled.
///
/// # Example
///
/// ```
/// use reckon::engine::Operation;
/// use reckon::operation_enum;
///
/// operation_enum! {
///     pub enum Rounding {
///         Floor => "Floor",
///         Ceil => "Ceiling",
///     }
///     scientific: [Ceil]
/// }
///
/// assert_eq!(Rounding::Ceil.name(), "Ceiling");
/// assert!(!Rounding::Floor.is_scientific());
/// assert!(Rounding::Ceil.is_scientific());
/// assert_eq!(Rounding::ALL.len(), 2);
/// ```
#[macro_export]
macro_rules! operation_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }

        $(scientific: [$($scientific:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::engine::Operation for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            fn is_scientific(&self) -> bool {
                match self {
                    $($(Self::$scientific => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::engine::Operation::name(self))
            }
        }
    };
}
