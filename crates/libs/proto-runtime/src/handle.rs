//! Typed field and extension handles.
//!
//! A handle is the static half of a field descriptor: owning message type,
//! field number and the Rust value type. The dynamic half (kind, cardinality,
//! default) lives in the [`Schema`](crate::Schema) and is checked on every
//! access.

use core::fmt;
use core::marker::PhantomData;

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident, $owner:ident) => {
        $(#[$doc])*
        pub struct $name<T> {
            $owner: &'static str,
            number: u32,
            _value: PhantomData<fn() -> T>,
        }

        impl<T> $name<T> {
            pub const fn new($owner: &'static str, number: u32) -> Self {
                Self { $owner, number, _value: PhantomData }
            }

            pub const fn $owner(&self) -> &'static str {
                self.$owner
            }

            pub const fn number(&self) -> u32 {
                self.number
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}#{})", stringify!($name), self.$owner, self.number)
            }
        }
    };
}

handle!(
    /// Singular field declared inline on `message`.
    Field,
    message
);

handle!(
    /// Repeated field declared inline on `message`.
    RepeatedField,
    message
);

handle!(
    /// Singular extension registered against `extendee`.
    Extension,
    extendee
);

handle!(
    /// Repeated extension registered against `extendee`.
    RepeatedExtension,
    extendee
);
