//! Helper macro for generating domain port error enums.
//!
//! Every port defines the same two failure shapes: the adapter could not
//! reach its backing store, or a query/mutation failed while executing. The
//! macro stamps out the enum plus snake_case constructors accepting
//! `impl Into<String>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { message: String } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant {
                    /// Adapter-supplied failure description.
                    message: String,
                },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    /// Variant constructor accepting anything stringly.
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant { message: message.into() }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        /// Example error for macro expansion checks.
        pub enum ExamplePortError {
            /// Connection failed.
            Connection { message: String } => "connection: {message}",
            /// Query failed.
            Query { message: String } => "query: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::connection("hello");
        assert_eq!(err.to_string(), "connection: hello");
    }

    #[test]
    fn variants_carry_their_messages() {
        let err = ExamplePortError::query("broken sql");
        assert!(matches!(err, ExamplePortError::Query { .. }));
        assert_eq!(err.to_string(), "query: broken sql");
    }
}
