//! Spectral pairs of size 4 in Z_2^3.
//!
//! Run with `RUST_LOG=debug` to watch every rejected row pair.

use fuglede::telemetry::init_tracing;
use fuglede::SpectralSearchBuilder;

fn main() {
    init_tracing().expect("Failed to install tracing subscriber");

    println!("Example for sets of size 4 in Z_2^3.\n");
    let search = SpectralSearchBuilder::new()
        .modulus(2)
        .dimension(3)
        .size(4)
        .build()
        .expect("Failed to build spectral search");
    let space = search.space();

    println!("Subsets of the first type:");
    for subset in space.first_sets(4) {
        let subset = subset.expect("Row reduction failed");
        println!("{subset}");
    }

    println!("Subsets of the second type:");
    for subset in space.second_sets(4) {
        println!("{subset}");
    }

    println!("Searching for spectral pairs of size 4...");
    let report = search.run().expect("Spectral search failed");
    println!(
        "Tested {} pairs, rejected {}, found {}.",
        report.pairs_tested,
        report.pairs_rejected,
        report.pairs.len()
    );
    for pair in &report.pairs {
        println!("\nE =\n{}B =\n{}H =\n{}", pair.first, pair.second, pair.log_hadamard);
    }
}
