//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[typeclass]` | on trait | Declare a capability and its dispatch table |
//! | `#[typeclass(auto)]` | on trait | Same, plus a blanket impl over the supertraits |

pub mod typeclass;

pub use typeclass::expand_typeclass;
