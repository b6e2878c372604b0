//! Procedural macros for the tola-typeclass dispatch system
//!
//! ## Macros
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[typeclass]` | trait | Declare a capability with its dispatch table |
//!
//! ## Example
//!
//! ```ignore
//! #[typeclass]
//! pub trait Show {
//!     fn show(&self) -> String;
//! }
//!
//! #[typeclass]
//! pub trait Enum {
//!     fn from_enum(&self) -> i64;
//! }
//!
//! // Compound capability, implemented for everything that is both.
//! #[typeclass(auto)]
//! pub trait ShowEnum: Show + Enum {}
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Declare a capability from a trait definition.
///
/// Every method must have the shape `fn op(&self) -> R`; it becomes one
/// slot `op: fn(Erased<'_>) -> R` of the generated `<Trait>Table`. Methods
/// bounded by `where Self: Sized` stay out of the table.
///
/// Generated next to the trait:
/// - `<Trait>Table`, the dispatch table struct
/// - `impl Capability for dyn Trait`
/// - `impl Includes<dyn Super> for dyn Trait` for itself and each supertrait
/// - `impl<T: Trait + Any + Sync> DeriveTable<T> for dyn Trait`
/// - `impl Trait for Handle<'_, C>`, dispatching through the table
///
/// Every supertrait must itself be a `#[typeclass]` without supertraits of
/// its own; its table is embedded by reference so one handle carries all of
/// them. A compound supertrait is a compile error.
///
/// Only `Sync` types can be bound to a handle, so the table derivation is
/// only implemented for `Sync` types. A non-`Sync` type (one holding a
/// `Cell`, `RefCell` or `Rc`) may implement the trait, but binding it fails
/// with an unsatisfied `DeriveTable` bound.
///
/// # Arguments
///
/// - `auto`: blanket-implement the trait for every type implementing all
///   supertraits. The trait must not have required methods.
///
/// # Usage
/// ```ignore
/// #[typeclass]
/// pub trait Show {
///     fn show(&self) -> String;
/// }
///
/// impl Show for i32 {
///     fn show(&self) -> String { self.to_string() }
/// }
///
/// let x = 42;
/// let h = Handle::<dyn Show>::new(&x);
/// assert_eq!(h.show(), "42");
/// ```
#[proc_macro_attribute]
pub fn typeclass(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as common::TypeclassArgs);
    let item = parse_macro_input!(item as syn::ItemTrait);
    user::expand_typeclass(args, item).into()
}
