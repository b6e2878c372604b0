//! Binder Generation Macros
//!
//! Function-based instances: attach a capability to a type through plain
//! functions instead of a trait impl, and get a named binder back.
//!
//! | Macro | Generates |
//! |-------|-----------|
//! | `impl_instance!(T: Cap { op = f })` | `impl DeriveTable<T> for dyn Cap` + `fn t_to_cap` |
//! | `impl_instance!(fn name(T): Cap { op = f })` | `impl DeriveTable<T> for dyn Cap` + `fn name` |
//! | `impl_instance!(T: Cap)` | `fn t_to_cap` only |
//! | `impl_instance!(fn name(T): Cap)` | `fn name` only |
//! | `ap!(x, T, Cap)` | call of `t_to_cap(x)` |
//!
//! The forms with a body implement the pair; the forms without one only
//! name a binder for a pair implemented elsewhere (a trait impl or another
//! `impl_instance!`). Every binder goes through the [registry](crate::registry),
//! so all binders of one pair hand out the same table, and implementing a
//! pair twice is a conflicting-impl error.
//!
//! Binder names are `<T:snake>_to_<Cap:snake>`, so `ap!` can find one from
//! the two names. The capability's table type (`<Cap>Table`) must be in
//! scope for the forms with a body.

// =============================================================================
// impl_instance! - implement(capability, type, functions) -> binder
// =============================================================================

/// Implement `Cap` for `T` with free functions, or name a binder for it.
///
/// Each function takes `&T` and returns the operation's result type.
///
/// # Example
///
/// ```ignore
/// fn antioch_show(x: &Antioch) -> String { ... }
///
/// impl_instance!(pub Antioch: Show { show = antioch_show });
/// // impl DeriveTable<Antioch> for dyn Show
/// // pub fn antioch_to_show(x: &Antioch) -> Handle<'_, dyn Show>
///
/// impl_instance!(pub fn prep_antioch_show(Antioch): Show);
/// // pub fn prep_antioch_show(x: &Antioch) -> Handle<'_, dyn Show>, same table
/// ```
///
/// A pair has exactly one implementation:
///
/// ```compile_fail
/// use tola_typeclass::impl_instance;
/// use tola_typeclass::prelude::*;
///
/// struct Antioch(u32);
///
/// fn antioch_show(_: &Antioch) -> String { "grenade".into() }
/// fn holy_show(_: &Antioch) -> String { "holy".into() }
///
/// impl_instance!(Antioch: Show { show = antioch_show });
/// impl_instance!(fn prep_antioch_show(Antioch): Show { show = holy_show });
///
/// fn main() {}
/// ```
#[macro_export]
macro_rules! impl_instance {
    // Implementation with an explicit binder name; any type.
    (
        $(#[$meta:meta])*
        $vis:vis fn $binder:ident($ty:ty): $cap:ident {
            $($op:ident = $imp:expr),+ $(,)?
        }
    ) => {
        $crate::paste::paste! {
            impl $crate::DeriveTable<$ty> for dyn $cap {
                fn derive_table() -> [<$cap Table>] {
                    [<$cap Table>] {
                        $($op: |this| $imp(this.downcast::<$ty>()),)+
                    }
                }
            }
        }

        $crate::impl_instance! {
            $(#[$meta])*
            $vis fn $binder($ty): $cap
        }
    };

    // Binder only, explicit name.
    (
        $(#[$meta:meta])*
        $vis:vis fn $binder:ident($ty:ty): $cap:ident
    ) => {
        $(#[$meta])*
        $vis fn $binder(x: &$ty) -> $crate::Handle<'_, dyn $cap> {
            $crate::Handle::new(x)
        }
    };

    // Implementation, binder named after the type and the capability.
    (
        $(#[$meta:meta])*
        $vis:vis $ty:ident: $cap:ident {
            $($op:ident = $imp:expr),+ $(,)?
        }
    ) => {
        $crate::paste::paste! {
            $crate::impl_instance! {
                $(#[$meta])*
                $vis fn [<$ty:snake _to_ $cap:snake>]($ty): $cap {
                    $($op = $imp),+
                }
            }
        }
    };

    // Binder only, named after the type and the capability.
    (
        $(#[$meta:meta])*
        $vis:vis $ty:ident: $cap:ident
    ) => {
        $crate::paste::paste! {
            $crate::impl_instance! {
                $(#[$meta])*
                $vis fn [<$ty:snake _to_ $cap:snake>]($ty): $cap
            }
        }
    };
}

// =============================================================================
// ap! - apply a capability to a value by type name
// =============================================================================

/// Apply capability `Cap` to a value of type `T` through its named binder.
///
/// ```ignore
/// print(ap!(&Antioch::HOLY, Antioch, Show));
/// // expands to: print(antioch_to_show(&Antioch::HOLY))
/// ```
#[macro_export]
macro_rules! ap {
    ($x:expr, $ty:ident, $cap:ident) => {
        $crate::paste::paste! { [<$ty:snake _to_ $cap:snake>]($x) }
    };
}
