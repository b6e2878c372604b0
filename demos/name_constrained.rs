//! Name-constrained binders
//!
//! `impl_instance!(T: Cap { .. })` names the binder `<t>_to_<cap>`, so
//! `ap!(x, T, Cap)` can call it from the type and capability names alone.

use tola_typeclass::prelude::*;
use tola_typeclass::{ap, impl_instance};
use tracing_subscriber::EnvFilter;

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

fn antioch_enum(x: &Antioch) -> i64 {
    i64::from(x.0)
}

// antioch_to_show, antioch_to_enum
impl_instance!(Antioch: Show { show = antioch_show });
impl_instance!(Antioch: Enum { from_enum = antioch_enum });

fn print(h: Handle<'_, dyn Show>) {
    println!("{}", h.show());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    print(ap!(&Antioch::HOLY, Antioch, Show));
    print(ap!(&Antioch::HAND, Antioch, Show));
    print(ap!(&Antioch::GRENADE, Antioch, Show));
    print(ap!(&Antioch(3), Antioch, Show));

    let grenade = Antioch::GRENADE;
    println!("{}", ap!(&grenade, Antioch, Enum).from_enum());
}
