//! Type-erased object references.
//!
//! [`Erased`] is the `data` half of a handle: a shared reference whose
//! concrete type is forgotten until a table slot re-specializes it.

use core::any::{Any, TypeId};
use core::fmt;

/// A shared reference to an object of unknown concrete type.
///
/// Only `Sync` objects can be erased, which makes every handle built on top
/// of this `Send + Sync`.
#[derive(Clone, Copy)]
pub struct Erased<'a> {
    object: &'a (dyn Any + Sync),
    type_name: &'static str,
}

impl<'a> Erased<'a> {
    #[inline]
    pub fn new<T: Any + Sync>(object: &'a T) -> Self {
        Erased {
            object,
            type_name: core::any::type_name::<T>(),
        }
    }

    /// Re-specialize the reference to its concrete type.
    ///
    /// Table slots call this with the type the table was derived for.
    ///
    /// # Panics
    ///
    /// If `T` is not the erased type. Tables built by `#[typeclass]` or
    /// `impl_instance!` never do this.
    #[inline]
    pub fn downcast<T: Any>(self) -> &'a T {
        match self.try_downcast::<T>() {
            Some(object) => object,
            None => unreachable!(
                "dispatch table for `{}` invoked on `{}`",
                core::any::type_name::<T>(),
                self.type_name,
            ),
        }
    }

    #[inline]
    pub fn try_downcast<T: Any>(self) -> Option<&'a T> {
        let object: &'a dyn Any = self.object;
        object.downcast_ref::<T>()
    }

    /// Identity of the referenced object.
    #[inline]
    pub fn id(self) -> ObjectId {
        ObjectId {
            addr: self.object as *const (dyn Any + Sync) as *const () as usize,
            type_id: (*self.object).type_id(),
        }
    }

    #[inline]
    pub fn type_name(self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn is<T: Any>(self) -> bool {
        self.id().type_id == TypeId::of::<T>()
    }
}

impl fmt::Debug for Erased<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Erased")
            .field("type", &self.type_name)
            .field("addr", &format_args!("{:#x}", self.id().addr))
            .finish()
    }
}

/// Object identity: address plus concrete type.
///
/// The type takes part because a struct and its first field share an
/// address but are different objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId {
    addr: usize,
    type_id: TypeId,
}

impl ObjectId {
    #[inline]
    pub fn addr(self) -> usize {
        self.addr
    }

    #[inline]
    pub fn type_id(self) -> TypeId {
        self.type_id
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.addr)
    }
}
