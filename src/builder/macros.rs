//! Macros for ergonomic identifier declaration.

/// Declare a plain enum usable as a state or trigger identifier.
///
/// The generated enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`,
/// serde's `Serialize` and `Deserialize`, and implements `Display` by
/// rendering the variant name. Callers need `serde` (with `derive`) as a
/// dependency.
///
/// # Example
///
/// ```
/// use fluidstate::fsm_enum;
///
/// fsm_enum! {
///     pub enum Thermostat {
///         Off,
///         On,
///         Heating,
///         Cooling,
///     }
/// }
///
/// assert_eq!(Thermostat::Heating.to_string(), "Heating");
/// ```
#[macro_export]
macro_rules! fsm_enum {
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
            serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str(stringify!($variant))),*
                }
            }
        }
    };
}
