//! # Capability Handles
//!
//! A [`Handle`] pairs a type-erased object reference with the `'static`
//! dispatch table of one capability for that object's concrete type:
//!
//! ```text
//! Handle<'a, dyn Show>
//! +---------------+        +------------------------+
//! | data  --------+------> | x: Antioch (borrowed)  |
//! | table --------+---+    +------------------------+
//! +---------------+   |
//!                     +--> ShowTable for Antioch   (one per type, 'static)
//! ```
//!
//! Calling an operation goes through the table only:
//! `(handle.table().show)(handle.data())`. The trait impls generated by
//! `#[typeclass]` do exactly that, so a handle can be passed anywhere the
//! trait itself is expected.

use core::any::Any;
use core::fmt;

use crate::capability::{Capability, DeriveTable, Includes};
use crate::combine::Combined2;
use crate::erased::{Erased, ObjectId};
use crate::registry;

/// Type-erased object bound to the dispatch table of capability `C`.
pub struct Handle<'a, C: ?Sized + Capability> {
    data: Erased<'a>,
    table: &'static C::Table,
}

impl<C: ?Sized + Capability> Clone for Handle<'_, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized + Capability> Copy for Handle<'_, C> {}

impl<'a, C: ?Sized + Capability> Handle<'a, C> {
    /// Bind `object` to the registry table of `C` for `T`.
    ///
    /// The table is derived on the first bind of `(C, T)` and reused by
    /// every later one.
    #[inline]
    pub fn new<T>(object: &'a T) -> Self
    where
        T: Any + Sync,
        C: DeriveTable<T>,
    {
        tracing::trace!(
            capability = C::NAME,
            concrete = core::any::type_name::<T>(),
            "bind"
        );
        Handle {
            data: Erased::new(object),
            table: registry::table::<C, T>(),
        }
    }

    /// Only callers that got `table` for the erased type of `data` may use
    /// this, such as combined-handle projections.
    #[inline]
    pub(crate) fn from_parts(data: Erased<'a>, table: &'static C::Table) -> Self {
        Handle { data, table }
    }

    #[inline]
    pub fn data(&self) -> Erased<'a> {
        self.data
    }

    #[inline]
    pub fn table(&self) -> &'static C::Table {
        self.table
    }

    #[inline]
    pub fn object(&self) -> ObjectId {
        self.data.id()
    }

    /// Both handles refer to the same object, whatever their capabilities.
    #[inline]
    pub fn same_object<D: ?Sized + Capability>(&self, other: &Handle<'_, D>) -> bool {
        self.object() == other.object()
    }

    /// Both handles dispatch through the very same table instance.
    #[inline]
    pub fn shares_table_with(&self, other: &Handle<'_, C>) -> bool {
        core::ptr::eq(self.table, other.table)
    }

    /// Narrow a compound handle to one of the capabilities it includes.
    #[inline]
    pub fn upcast<D: ?Sized + Capability>(self) -> Handle<'a, D>
    where
        C: Includes<D>,
    {
        Handle {
            data: self.data,
            table: C::project(self.table),
        }
    }

    /// Combine with a handle for another capability on the same object.
    ///
    /// Fails with [`Error::MismatchedCombination`](crate::Error::MismatchedCombination)
    /// if `other` refers to a different object.
    #[inline]
    pub fn combine<D: ?Sized + Capability>(
        self,
        other: Handle<'a, D>,
    ) -> crate::Result<Combined2<'a, C, D>> {
        Combined2::new(self, other)
    }
}

impl<C: ?Sized + Capability> fmt::Debug for Handle<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("capability", &C::NAME)
            .field("data", &self.data)
            .field("table", &(self.table as *const C::Table))
            .finish()
    }
}

/// Bind `object` to capability `C`: `bind::<dyn Show, _>(&x)`.
///
/// Only `Sync` objects can be bound, since handles are shared freely. A
/// type with interior mutability may implement a typeclass but never gets
/// a table:
///
/// ```compile_fail
/// use std::cell::Cell;
/// use tola_typeclass::prelude::*;
///
/// #[typeclass]
/// pub trait Count {
///     fn count(&self) -> u8;
/// }
///
/// impl Count for Cell<u8> {
///     fn count(&self) -> u8 {
///         self.get()
///     }
/// }
///
/// let c = Cell::new(3u8);
/// let _ = bind::<dyn Count, _>(&c);
/// ```
#[inline]
pub fn bind<'a, C, T>(object: &'a T) -> Handle<'a, C>
where
    C: ?Sized + DeriveTable<T>,
    T: Any + Sync,
{
    Handle::new(object)
}
