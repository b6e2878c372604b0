//! # Standard Capabilities
//!
//! | Capability | Operation | Meaning |
//! |------------|-----------|---------|
//! | [`Show`] | `show(&self) -> String` | Text representation |
//! | [`Enum`] | `from_enum(&self) -> i64` | Ordinal value |
//! | [`ShowEnum`] | both | Compound, implemented for every `Show + Enum` type |
//!
//! Instances are provided for the primitive types where the operation is
//! total: every integer type for `Show`, integers that fit in `i64` for
//! `Enum`.

use crate::combine::Combined2;
use crate::typeclass;

/// Types that can be turned into their text representation.
///
/// The returned `String` is owned by the caller.
#[typeclass]
pub trait Show {
    fn show(&self) -> String;
}

/// Types with an ordinal value.
#[typeclass]
pub trait Enum {
    fn from_enum(&self) -> i64;
}

/// Both `Show` and `Enum`, bound to one object.
#[typeclass(auto)]
pub trait ShowEnum: Show + Enum {}

/// Render `"<show> : <from_enum>"`.
///
/// Works for concrete values, `&dyn ShowEnum` and `Handle<'_, dyn ShowEnum>`.
pub fn describe<T: ShowEnum + ?Sized>(value: &T) -> String {
    format!("{} : {}", value.show(), value.from_enum())
}

/// [`describe`] for a runtime-combined handle.
pub fn describe_combined(shen: Combined2<'_, dyn Show, dyn Enum>) -> String {
    format!("{} : {}", shen.first().show(), shen.second().from_enum())
}

// =============================================================================
// Instances
// =============================================================================

macro_rules! impl_show_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Show for $t {
                #[inline]
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! impl_enum_lossless {
    ($($t:ty),* $(,)?) => {
        $(
            impl Enum for $t {
                #[inline]
                fn from_enum(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

impl_show_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String,
    &'static str,
);

impl_enum_lossless!(i8, i16, i32, i64, u8, u16, u32, bool);

impl Enum for char {
    #[inline]
    fn from_enum(&self) -> i64 {
        i64::from(u32::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::handle::bind;
    use crate::Handle;

    #[test]
    fn test_show_instances() {
        assert_eq!(bind::<dyn Show, _>(&-3i8).show(), "-3");
        assert_eq!(bind::<dyn Show, _>(&true).show(), "true");
        assert_eq!(bind::<dyn Show, _>(&'x').show(), "x");
        assert_eq!(bind::<dyn Show, _>(&"holy").show(), "holy");
        assert_eq!(bind::<dyn Show, _>(&String::from("hand")).show(), "hand");
    }

    #[test]
    fn test_enum_instances() {
        assert_eq!(bind::<dyn Enum, _>(&u32::MAX).from_enum(), u32::MAX as i64);
        assert_eq!(bind::<dyn Enum, _>(&false).from_enum(), 0);
        assert_eq!(bind::<dyn Enum, _>(&'A').from_enum(), 65);
    }

    #[test]
    fn test_describe_compound() {
        let x = 42i32;
        assert_eq!(describe(&x), "42 : 42");

        let h: Handle<'_, dyn ShowEnum> = bind(&x);
        assert_eq!(describe(&h), "42 : 42");

        let d: &dyn ShowEnum = &x;
        assert_eq!(describe(d), "42 : 42");
    }

    #[test]
    fn test_compound_flags() {
        assert!(!<dyn Show as Capability>::COMPOUND);
        assert!(!<dyn Enum as Capability>::COMPOUND);
        assert!(<dyn ShowEnum as Capability>::COMPOUND);
    }
}
