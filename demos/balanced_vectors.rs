//! Balanced vectors of size 4 over Z_2 and the action of the first of them.
//!
//! Run with `RUST_LOG=debug` to see the enumeration events.

use fuglede::balanced::PairAction;
use fuglede::telemetry::init_tracing;
use fuglede::BalancedSpaceBuilder;

fn main() {
    init_tracing().expect("Failed to install tracing subscriber");

    let space = BalancedSpaceBuilder::new()
        .size(4)
        .modulus(2)
        .build()
        .expect("Failed to build balanced vector space");

    println!("Balanced vectors of size 4 over Z_2:");
    for v in space.elements() {
        println!("  {v}");
    }
    println!();

    let x = space
        .elements()
        .next()
        .expect("The space is never empty");
    println!("Reduced action of {x}:");
    for (y, z) in space.reduced_action(&x) {
        println!("  {y} -> {z}");
    }
    println!();

    let graph = space.reduced_digraph(&x);
    println!("Connected components of its digraph:");
    for component in graph.connected_components() {
        let nodes: Vec<String> = component.iter().map(ToString::to_string).collect();
        println!("  [{}]", nodes.join(", "));
    }
    println!();

    println!("Orbits under the action of {x}:");
    for y in space.elements() {
        match space.pair_action(&x, &y) {
            Ok(PairAction::Degenerate) => println!("  {y}: degenerate"),
            Ok(PairAction::Orbit(orbit)) => {
                let steps: Vec<String> = orbit.iter().map(ToString::to_string).collect();
                println!("  {y}: [{}]", steps.join(", "));
            }
            Err(err) => println!("  {y}: {err}"),
        }
    }
}
