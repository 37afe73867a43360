//! Defines helper macros for generating domain port error enums.
//!
//! Each variant gets a snake-case constructor. Struct-variant fields accept
//! `impl Into<T>` so call sites can pass `&str` for `String` fields. The
//! generated `kind()` names the variant for structured log fields without
//! repeating payloads such as remote response bodies.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*

            ::paste::paste! {
                /// Snake-case variant name, logged as the `kind` field.
                pub fn kind(&self) -> &'static str {
                    match self {
                        $( Self::$variant { .. } => stringify!([<$variant:snake>]), )*
                    }
                }
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for generated constructors and messages.
    define_port_error! {
        pub enum ExamplePortError {
            Unavailable => "unavailable",
            Rejected { status: u16, body: String } => "rejected ({status}): {body}",
            Missing { names: Vec<&'static str> } => "missing: {names:?}",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(ExamplePortError::unavailable(), ExamplePortError::Unavailable);
        assert_eq!(ExamplePortError::unavailable().to_string(), "unavailable");
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::rejected(404_u16, "not found");
        assert_eq!(err.to_string(), "rejected (404): not found");
    }

    #[test]
    fn constructors_convert_collection_fields() {
        let err = ExamplePortError::missing(vec!["A", "B"]);
        assert_eq!(err.to_string(), "missing: [\"A\", \"B\"]");
    }

    #[test]
    fn kind_names_each_variant_in_snake_case() {
        assert_eq!(ExamplePortError::unavailable().kind(), "unavailable");
        assert_eq!(ExamplePortError::rejected(500_u16, "boom").kind(), "rejected");
        assert_eq!(ExamplePortError::missing(vec!["A"]).kind(), "missing");
    }
}
