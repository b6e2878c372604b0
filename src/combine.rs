//! # Combined Handles
//!
//! A combined handle carries one object reference and several dispatch
//! tables, one per capability:
//!
//! ```text
//! Combined2<'a, dyn Show, dyn Enum>
//! +----------------+
//! | data   --------+------> x: i32
//! | tables.0 ------+------> ShowTable for i32
//! | tables.1 ------+------> EnumTable for i32
//! +----------------+
//! ```
//!
//! Every table must come from a handle bound to the same object. Handles
//! are checked at construction and a mismatch is rejected with
//! [`Error::MismatchedCombination`]. When the capabilities are known up
//! front, a compound typeclass (`trait ShowEnum: Show + Enum`) gives the
//! same shape with the check done by the type system instead.

use core::fmt;

use crate::capability::Capability;
use crate::erased::{Erased, ObjectId};
use crate::error::{Error, Result};
use crate::handle::Handle;

/// Tuples of handles that can be combined: `(h1, h2).combine()`.
pub trait Combine<'a> {
    type Output;

    fn combine(self) -> Result<Self::Output>;
}

/// Combine a tuple of handles bound to one object.
///
/// ```ignore
/// let shen = combine((bind::<dyn Show, _>(&x), bind::<dyn Enum, _>(&x)))?;
/// ```
#[inline]
pub fn combine<'a, H: Combine<'a>>(handles: H) -> Result<H::Output> {
    handles.combine()
}

fn ensure_same_object(expected: Erased<'_>, found: Erased<'_>, position: usize) -> Result<()> {
    if expected.id() == found.id() {
        return Ok(());
    }
    tracing::debug!(
        position,
        expected = expected.type_name(),
        found = found.type_name(),
        "combination rejected: handles bound to different objects"
    );
    Err(Error::MismatchedCombination {
        position,
        expected: expected.id(),
        found: found.id(),
        expected_type: expected.type_name(),
        found_type: found.type_name(),
    })
}

// Generate CombinedN for one arity. The first handle is the reference
// object every following handle is checked against.
macro_rules! define_combined {
    (
        $(#[$meta:meta])*
        $name:ident {
            $head:ident: $H:ident => $head_idx:tt
            $(, $acc:ident: $C:ident => $idx:tt)+
        }
    ) => {
        $(#[$meta])*
        pub struct $name<'a, $H: ?Sized + Capability $(, $C: ?Sized + Capability)+> {
            data: Erased<'a>,
            tables: (&'static $H::Table, $(&'static $C::Table,)+),
        }

        impl<$H: ?Sized + Capability $(, $C: ?Sized + Capability)+> Clone
            for $name<'_, $H $(, $C)+>
        {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$H: ?Sized + Capability $(, $C: ?Sized + Capability)+> Copy
            for $name<'_, $H $(, $C)+>
        {
        }

        impl<'a, $H: ?Sized + Capability $(, $C: ?Sized + Capability)+> $name<'a, $H $(, $C)+> {
            /// Combine handles bound to one object.
            pub fn new($head: Handle<'a, $H> $(, $acc: Handle<'a, $C>)+) -> Result<Self> {
                let data = $head.data();
                $(ensure_same_object(data, $acc.data(), $idx)?;)+
                Ok($name {
                    data,
                    tables: ($head.table(), $($acc.table(),)+),
                })
            }

            #[inline]
            pub fn data(&self) -> Erased<'a> {
                self.data
            }

            #[inline]
            pub fn object(&self) -> ObjectId {
                self.data.id()
            }

            #[inline]
            pub fn $head(&self) -> Handle<'a, $H> {
                Handle::from_parts(self.data, self.tables.$head_idx)
            }

            $(
                #[inline]
                pub fn $acc(&self) -> Handle<'a, $C> {
                    Handle::from_parts(self.data, self.tables.$idx)
                }
            )+

            /// Back to one handle per capability.
            #[inline]
            pub fn split(self) -> (Handle<'a, $H>, $(Handle<'a, $C>,)+) {
                (self.$head(), $(self.$acc(),)+)
            }
        }

        impl<'a, $H: ?Sized + Capability $(, $C: ?Sized + Capability)+> Combine<'a>
            for (Handle<'a, $H>, $(Handle<'a, $C>,)+)
        {
            type Output = $name<'a, $H $(, $C)+>;

            #[inline]
            fn combine(self) -> Result<Self::Output> {
                $name::new(self.$head_idx $(, self.$idx)+)
            }
        }

        impl<$H: ?Sized + Capability $(, $C: ?Sized + Capability)+> fmt::Debug
            for $name<'_, $H $(, $C)+>
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("capabilities", &[$H::NAME $(, $C::NAME)+])
                    .field("data", &self.data)
                    .finish()
            }
        }
    };
}

define_combined! {
    /// One object with the tables of two capabilities.
    Combined2 { first: C1 => 0, second: C2 => 1 }
}

define_combined! {
    /// One object with the tables of three capabilities.
    Combined3 { first: C1 => 0, second: C2 => 1, third: C3 => 2 }
}

define_combined! {
    /// One object with the tables of four capabilities.
    Combined4 { first: C1 => 0, second: C2 => 1, third: C3 => 2, fourth: C4 => 3 }
}
