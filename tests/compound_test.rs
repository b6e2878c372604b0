//! Compound typeclasses: one handle, several tables, one object.

use tola_typeclass::prelude::*;
use tola_typeclass::registry;

#[typeclass]
pub trait Speak {
    fn speak(&self) -> String;
}

#[typeclass]
pub trait Legs {
    fn legs(&self) -> u32;
}

/// Compound with an operation of its own.
#[typeclass]
pub trait Creature: Speak + Legs {
    fn motto(&self) -> &'static str;

    fn introduce(&self) -> String {
        format!("{} on {} legs: {}", self.speak(), self.legs(), self.motto())
    }

    fn into_legs(self) -> u32
    where
        Self: Sized,
    {
        self.legs()
    }
}

#[derive(Clone, Copy)]
struct BlackKnight {
    limbs: u32,
}

impl Speak for BlackKnight {
    fn speak(&self) -> String {
        "None shall pass".to_string()
    }
}

impl Legs for BlackKnight {
    fn legs(&self) -> u32 {
        self.limbs.min(2)
    }
}

impl Creature for BlackKnight {
    fn motto(&self) -> &'static str {
        if self.limbs == 4 { "'Tis but a scratch" } else { "I'm invincible" }
    }
}

#[test]
fn test_compound_handle_dispatch() {
    let k = BlackKnight { limbs: 4 };
    let h = bind::<dyn Creature, _>(&k);

    assert_eq!(h.speak(), "None shall pass");
    assert_eq!(h.legs(), 2);
    assert_eq!(h.motto(), "'Tis but a scratch");
    // Default methods run on top of the dispatched operations.
    assert_eq!(h.introduce(), k.introduce());
    assert_eq!(h.into_legs(), 2);
}

#[test]
fn test_compound_table_reuses_constituent_tables() {
    let k = BlackKnight { limbs: 0 };
    let h = bind::<dyn Creature, _>(&k);

    let speak = h.upcast::<dyn Speak>();
    let legs = h.upcast::<dyn Legs>();
    assert!(speak.shares_table_with(&bind::<dyn Speak, _>(&k)));
    assert!(legs.shares_table_with(&bind::<dyn Legs, _>(&k)));
    assert!(speak.same_object(&legs));
    assert!(h.upcast::<dyn Creature>().shares_table_with(&h));

    assert!(registry::contains::<dyn Speak, BlackKnight>());
    assert!(registry::contains::<dyn Legs, BlackKnight>());
}

#[test]
fn test_compound_handle_combines_with_itself() {
    let k = BlackKnight { limbs: 1 };
    let h = bind::<dyn Creature, _>(&k);

    let c = h.upcast::<dyn Speak>().combine(h.upcast::<dyn Legs>()).unwrap();
    assert_eq!(c.second().legs(), 1);
}

#[test]
fn test_auto_compound_for_user_type() {
    struct Cereal;

    impl Show for Cereal {
        fn show(&self) -> String {
            "breakfast cereal".into()
        }
    }

    impl Enum for Cereal {
        fn from_enum(&self) -> i64 {
            -1
        }
    }

    let c = Cereal;
    let h = bind::<dyn ShowEnum, _>(&c);
    assert_eq!(describe(&h), "breakfast cereal : -1");
    assert_eq!(describe(&c), describe(&h));
    let shen = combine((h.upcast::<dyn Show>(), h.upcast::<dyn Enum>())).unwrap();
    assert_eq!(describe_combined(shen), "breakfast cereal : -1");
}

#[typeclass]
pub trait Labelled: Show + Enum {
    fn label(&self) -> String;
}

impl Labelled for i32 {
    fn label(&self) -> String {
        format!("#{}", self.from_enum())
    }
}

#[test]
fn test_compound_over_standard_capabilities() {
    let x = 42i32;
    let h = bind::<dyn Labelled, _>(&x);

    assert_eq!(h.label(), "#42");
    // A Labelled handle is Show + Enum, hence ShowEnum.
    assert_eq!(describe(&h), "42 : 42");
    assert!(h.upcast::<dyn Show>().shares_table_with(&bind::<dyn Show, _>(&x)));
    assert!(<dyn Labelled as Capability>::COMPOUND);
}
