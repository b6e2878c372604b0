//! Show and Enum, combined
//!
//! Two capabilities on one object, first as a runtime combination of two
//! handles, then as the `ShowEnum` compound typeclass.

use std::process::ExitCode;

use tola_typeclass::prelude::*;
use tracing_subscriber::EnvFilter;

// Knows nothing about i32.
fn print_shen(shen: Combined2<'_, dyn Show, dyn Enum>) {
    println!("{}", describe_combined(shen));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let x = 42i32;
    match combine((bind::<dyn Show, _>(&x), bind::<dyn Enum, _>(&x))) {
        Ok(shen) => print_shen(shen),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    // The compound handle cannot be built over two objects.
    let h: Handle<'_, dyn ShowEnum> = bind(&x);
    println!("{}", describe(&h));

    // Handles on different objects are rejected.
    let y = 7i32;
    if let Err(err) = bind::<dyn Show, _>(&x).combine(bind::<dyn Enum, _>(&y)) {
        println!("rejected: {err}");
    }

    ExitCode::SUCCESS
}
