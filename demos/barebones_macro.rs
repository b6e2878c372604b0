//! Barebones Show, macro edition
//!
//! Same output as `barebones`, with the binder generated by
//! `impl_instance!` and a second type wired up the same way.

use tola_typeclass::impl_instance;
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

struct Count(u8);

fn count_show(c: &Count) -> String {
    match c.0 {
        3 => "three, no more, no less".to_string(),
        5 => "right out".to_string(),
        n => n.to_string(),
    }
}

impl_instance!(fn prep_antioch_show(Antioch): Show { show = antioch_show });
impl_instance!(fn prep_count_show(Count): Show { show = count_show });

fn print(h: Handle<'_, dyn Show>) {
    println!("{}", h.show());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for tag in [Antioch::HOLY, Antioch::HAND, Antioch::GRENADE, Antioch(3)] {
        print(prep_antioch_show(&tag));
    }
    print(prep_count_show(&Count(3)));
    print(prep_count_show(&Count(5)));
}
