//! # Capability Descriptors
//!
//! A capability is a named set of operations. Its *descriptor* is a table of
//! function pointers with one slot per operation, each slot taking the
//! type-erased receiver:
//!
//! ```text
//! trait Show { fn show(&self) -> String; }
//!
//!         |  #[typeclass]
//!         v
//!
//! struct ShowTable { show: fn(Erased<'_>) -> String }
//! impl Capability for dyn Show { type Table = ShowTable; }
//! ```
//!
//! The capability is keyed by the trait object type (`dyn Show`), so the
//! Rust trait itself names it and no separate marker type is needed.
//!
//! ## Traits
//!
//! | Trait | Implemented for | Purpose |
//! |-------|-----------------|---------|
//! | [`Capability`] | `dyn Trait` | Names the table shape |
//! | [`DeriveTable<T>`] | `dyn Trait` | Builds the table for concrete `T` |
//! | [`Includes<D>`] | `dyn Compound` | Projects a compound table to a constituent |
//!
//! All three are normally emitted by [`typeclass`](crate::typeclass); the
//! manual forms are useful for capabilities whose tables need custom wiring.

/// A capability: a fixed-shape dispatch table plus a display name.
///
/// `Table` is immutable once built and shared by every object of one
/// concrete type, hence the `Send + Sync + 'static` bound.
pub trait Capability: 'static {
    /// The descriptor shape, one function pointer per operation.
    type Table: Send + Sync + 'static;

    /// Human readable capability name, used in diagnostics and logs.
    const NAME: &'static str;

    /// Whether the table embeds supertrait tables.
    ///
    /// A compound capability cannot itself be a supertrait: `Includes` only
    /// reaches one level down, so a handle of the outer typeclass could not
    /// dispatch the inner one's supertraits. `#[typeclass]` rejects such
    /// declarations at compile time through this flag:
    ///
    /// ```compile_fail
    /// use tola_typeclass::prelude::*;
    ///
    /// #[typeclass]
    /// pub trait Labelled: ShowEnum {
    ///     fn label(&self) -> String;
    /// }
    /// ```
    ///
    /// Listing the constituents works:
    ///
    /// ```
    /// use tola_typeclass::prelude::*;
    ///
    /// #[typeclass]
    /// pub trait Labelled: Show + Enum {
    ///     fn label(&self) -> String;
    /// }
    ///
    /// impl Labelled for i32 {
    ///     fn label(&self) -> String {
    ///         format!("#{}", self.show())
    ///     }
    /// }
    ///
    /// let h = bind::<dyn Labelled, _>(&42i32);
    /// assert_eq!(h.label(), "#42");
    /// assert_eq!(describe(&h), "42 : 42");
    /// ```
    const COMPOUND: bool = false;
}

/// Builds the dispatch table of a capability for the concrete type `T`.
///
/// Called at most once per `(Self, T)` pair by the [registry](crate::registry).
/// The implementation wires every slot to `T`'s operation through a wrapper
/// that re-specializes the erased receiver with [`Erased::downcast`].
///
/// [`Erased::downcast`]: crate::Erased::downcast
pub trait DeriveTable<T: ?Sized>: Capability {
    fn derive_table() -> Self::Table;
}

/// Capability `Self` carries the table of capability `D`.
///
/// Every capability includes itself. A compound capability (a typeclass
/// whose supertraits are typeclasses) additionally includes each of its
/// supertraits, which lets a single handle stand in for a combined one.
pub trait Includes<D: ?Sized + Capability>: Capability {
    fn project(table: &'static Self::Table) -> &'static D::Table;
}
