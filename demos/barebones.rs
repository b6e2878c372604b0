//! Barebones Show
//!
//! One capability, one tag type, one hand-written binder. The table
//! derivation is spelled out in full instead of coming from
//! `impl_instance!`.
//!
//! Run with `RUST_LOG=tola_typeclass=debug` to see the table being built
//! once.

use tola_typeclass::prelude::*;
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

// Runs once, on the first bind of an Antioch to Show.
impl DeriveTable<Antioch> for dyn Show {
    fn derive_table() -> ShowTable {
        ShowTable {
            show: |this| antioch_show(this.downcast::<Antioch>()),
        }
    }
}

fn prep_antioch_show(x: &Antioch) -> Handle<'_, dyn Show> {
    Handle::new(x)
}

// Knows nothing about Antioch.
fn print(h: Handle<'_, dyn Show>) {
    let s = (h.table().show)(h.data());
    println!("{s}");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    print(prep_antioch_show(&Antioch::HOLY));
    print(prep_antioch_show(&Antioch::HAND));
    print(prep_antioch_show(&Antioch::GRENADE));
    print(prep_antioch_show(&Antioch(3)));
}
