//! Binder naming: every (type, capability) pair gets its own function, and
//! equally named binders in different modules stay apart.

use tola_typeclass::prelude::*;
use tola_typeclass::{ap, impl_instance};

struct Spam(u8);
struct Eggs(u8);

fn spam_show(x: &Spam) -> String {
    "spam, ".repeat(x.0 as usize)
}

fn spam_enum(x: &Spam) -> i64 {
    i64::from(x.0)
}

fn eggs_show(_: &Eggs) -> String {
    "eggs".to_string()
}

fn eggs_enum(x: &Eggs) -> i64 {
    -i64::from(x.0)
}

impl_instance!(Spam: Show { show = spam_show });
impl_instance!(Spam: Enum { from_enum = spam_enum });
impl_instance!(Eggs: Show { show = eggs_show });
impl_instance!(Eggs: Enum { from_enum = eggs_enum });

#[test]
fn test_type_capability_grid() {
    let (s, e) = (Spam(2), Eggs(3));

    assert_eq!(spam_to_show(&s).show(), "spam, spam, ");
    assert_eq!(spam_to_enum(&s).from_enum(), 2);
    assert_eq!(eggs_to_show(&e).show(), "eggs");
    assert_eq!(eggs_to_enum(&e).from_enum(), -3);

    assert_eq!(ap!(&s, Spam, Enum).from_enum(), 2);
    assert_eq!(ap!(&e, Eggs, Show).show(), "eggs");
}

#[test]
fn test_binder_handles_combine() {
    let s = Spam(1);
    let shen = combine((ap!(&s, Spam, Show), ap!(&s, Spam, Enum))).unwrap();
    assert_eq!(describe_combined(shen), "spam,  : 1");
}

mod breakfast {
    use tola_typeclass::impl_instance;
    use tola_typeclass::prelude::*;

    pub struct Spam;

    fn show(_: &Spam) -> String {
        "lovely spam".to_string()
    }

    impl_instance!(pub Spam: Show { show = show });
}

#[test]
fn test_same_name_in_other_module() {
    let local = spam_to_show(&Spam(1));
    let other = breakfast::spam_to_show(&breakfast::Spam);
    assert_eq!(other.show(), "lovely spam");
    assert_ne!(local.show(), other.show());
    assert!(!local.same_object(&other));
}

#[test]
fn test_binder_shares_table_per_type() {
    let (a, b) = (Eggs(1), Eggs(2));
    assert!(eggs_to_show(&a).shares_table_with(&eggs_to_show(&b)));
    // Each concrete type owns its own table.
    assert_ne!(
        eggs_to_enum(&a).table() as *const EnumTable,
        spam_to_enum(&Spam(1)).table() as *const EnumTable,
    );
}
