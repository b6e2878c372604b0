//! # tola-typeclass
//!
//! Typeclass-style ad-hoc polymorphism through explicit dispatch tables and
//! type-erased handles.
//!
//! ## Architecture
//!
//! A *capability* is a set of operations. For each (concrete type,
//! capability) pair there is exactly one immutable *dispatch table* of
//! function pointers, built on first use and shared for the rest of the
//! program. A *handle* pairs an erased object reference with that table.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Descriptors                                             |
//! |  - Capability, DeriveTable, Includes, <Trait>Table (#[typeclass]) |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Handles                                                 |
//! |  - Erased, Handle, bind                                           |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Binders                                                 |
//! |  - registry (TypeId keyed, the only source of tables)             |
//! |  - impl_instance!, ap!                                            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Composition                                             |
//! |  - Combined2..4, combine, compound typeclasses                    |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_typeclass::prelude::*;
//!
//! #[typeclass]
//! pub trait Greet {
//!     fn greet(&self) -> String;
//! }
//!
//! struct Knight;
//!
//! impl Greet for Knight {
//!     fn greet(&self) -> String {
//!         "Ni!".to_string()
//!     }
//! }
//!
//! // Capability-generic consumer: knows nothing about `Knight`.
//! fn greet_twice(g: Handle<'_, dyn Greet>) -> String {
//!     format!("{} {}", g.greet(), g.greet())
//! }
//!
//! let k = Knight;
//! assert_eq!(greet_twice(bind(&k)), "Ni! Ni!");
//! ```
//!
//! ## Composition
//!
//! Handles for different capabilities on one object combine into a single
//! multi-capability handle. Handles on different objects are rejected:
//!
//! ```
//! use tola_typeclass::prelude::*;
//!
//! let (x, y) = (42i32, 7i32);
//! let shen = combine((bind::<dyn Show, _>(&x), bind::<dyn Enum, _>(&x))).unwrap();
//! assert_eq!(describe_combined(shen), "42 : 42");
//!
//! assert!(combine((bind::<dyn Show, _>(&x), bind::<dyn Enum, _>(&y))).is_err());
//! ```
//!
//! A compound typeclass rules the mismatch out statically: its handle
//! carries one object reference for all of its tables.
//!
//! ```compile_fail
//! use tola_typeclass::prelude::*;
//!
//! // `Antioch` can be shown but has no ordinal value.
//! struct Antioch;
//! impl Show for Antioch {
//!     fn show(&self) -> String { "holy".into() }
//! }
//!
//! let a = Antioch;
//! let _ = bind::<dyn ShowEnum, _>(&a);
//! ```

// Allow `::tola_typeclass` paths emitted by the proc macros inside the crate itself
extern crate self as tola_typeclass;

// Re-export paste for impl_instance! and ap!
pub use paste;

// =============================================================================
// Layer 0: Descriptors
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 1: Handles
// =============================================================================
pub mod erased;
pub mod handle;

// =============================================================================
// Layer 2: Binders
// =============================================================================
pub mod registry;

// Syntax macros (impl_instance!, ap!)
pub mod syntax_macros;

// =============================================================================
// Layer 3: Composition
// =============================================================================
pub mod combine;

// =============================================================================
// Standard capabilities and errors
// =============================================================================
pub mod classes;
pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{Capability, DeriveTable, Includes};
pub use combine::{combine, Combine, Combined2, Combined3, Combined4};
pub use erased::{Erased, ObjectId};
pub use error::{Error, Result};
pub use handle::{bind, Handle};

// Re-export proc-macros
pub use macros::typeclass;

/// Common items for defining and using capabilities.
pub mod prelude {
    pub use crate::capability::{Capability, DeriveTable, Includes};
    pub use crate::classes::{
        describe, describe_combined, Enum, EnumTable, Show, ShowEnum, ShowEnumTable, ShowTable,
    };
    pub use crate::combine::{combine, Combine, Combined2, Combined3, Combined4};
    pub use crate::erased::Erased;
    pub use crate::handle::{bind, Handle};
    pub use macros::typeclass;
    // Note: impl_instance! and ap! are #[macro_export] so they're at crate root
}
