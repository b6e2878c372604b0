//! End-to-end scenarios: a tag type shown through its named binders, an
//! integer shown and enumerated through a combined handle, and rejected
//! combinations.

use tola_typeclass::prelude::*;
use tola_typeclass::{ap, impl_instance, Error};

/// A C-style tag. Any `u32` is representable, named or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Antioch(u32);

impl Antioch {
    const HOLY: Antioch = Antioch(0);
    const HAND: Antioch = Antioch(1);
    const GRENADE: Antioch = Antioch(2);
}

fn antioch_show(x: &Antioch) -> String {
    match *x {
        Antioch::HOLY => "holy",
        Antioch::HAND => "hand",
        Antioch::GRENADE => "grenade",
        _ => "breakfast cereal",
    }
    .to_string()
}

impl_instance!(Antioch: Show { show = antioch_show });
impl_instance!(fn prep_antioch_show(Antioch): Show);

/// Capability-generic consumer.
fn print(h: Handle<'_, dyn Show>) -> String {
    h.show()
}

// =============================================================================
// Show through a binder
// =============================================================================

#[test]
fn test_named_binder_shows_every_tag() {
    assert_eq!(print(prep_antioch_show(&Antioch::HOLY)), "holy");
    assert_eq!(print(prep_antioch_show(&Antioch::HAND)), "hand");
    assert_eq!(print(prep_antioch_show(&Antioch::GRENADE)), "grenade");
    assert_eq!(print(prep_antioch_show(&Antioch(3))), "breakfast cereal");
}

#[test]
fn test_ap_matches_named_binder() {
    for tag in [Antioch::HOLY, Antioch::HAND, Antioch::GRENADE, Antioch(99)] {
        assert_eq!(print(ap!(&tag, Antioch, Show)), print(antioch_to_show(&tag)));
        assert_eq!(print(ap!(&tag, Antioch, Show)), antioch_show(&tag));
    }
}

#[test]
fn test_every_binder_shares_one_table() {
    let grenade = Antioch::GRENADE;
    let generic = bind::<dyn Show, _>(&grenade);
    let named = antioch_to_show(&grenade);
    let prep = prep_antioch_show(&grenade);
    let applied = ap!(&grenade, Antioch, Show);

    assert!(generic.shares_table_with(&named));
    assert!(named.shares_table_with(&prep));
    assert!(prep.shares_table_with(&applied));
    assert_eq!(print(generic), print(named));
    assert_eq!(print(bind(&Antioch(7))), "breakfast cereal");
}

// =============================================================================
// Show and Enum combined
// =============================================================================

#[test]
fn test_combined_show_enum_on_int() {
    let x = 42i32;
    let shen = combine((bind::<dyn Show, _>(&x), bind::<dyn Enum, _>(&x))).unwrap();
    assert_eq!(describe_combined(shen), "42 : 42");

    // Same result through the compound typeclass.
    assert_eq!(describe(&bind::<dyn ShowEnum, _>(&x)), "42 : 42");
}

#[test]
fn test_combination_over_different_objects_fails() {
    let (x, y) = (42i32, 42i32);
    let err = combine((bind::<dyn Show, _>(&x), bind::<dyn Enum, _>(&y))).unwrap_err();

    let Error::MismatchedCombination {
        position,
        expected_type,
        found_type,
        ..
    } = err;
    assert_eq!(position, 1);
    assert_eq!(expected_type, "i32");
    assert_eq!(found_type, "i32");
}

#[repr(C)]
struct Wrapper {
    inner: i32,
}

impl Show for Wrapper {
    fn show(&self) -> String {
        format!("Wrapper({})", self.inner)
    }
}

#[test]
fn test_struct_and_first_field_are_different_objects() {
    let w = Wrapper { inner: 42 };
    let shown = bind::<dyn Show, _>(&w);
    let counted = bind::<dyn Enum, _>(&w.inner);

    assert_eq!(shown.object().addr(), counted.object().addr());
    assert!(!shown.same_object(&counted));
    assert!(shown.combine(counted).is_err());
}
