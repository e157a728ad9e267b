use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fuglede::linalg;
use fuglede::{BalancedVectorSpace, SubsetPairs};

fn bench_balanced_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("BalancedElements");

    for (size, modulus) in [(4, 2), (6, 2), (6, 3), (8, 2), (9, 3)] {
        let id = format!("{size}/{modulus}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &(size, modulus), |b, &(s, m)| {
            let space = BalancedVectorSpace::new(s, m).unwrap();
            b.iter(|| space.elements().count());
        });
    }
    group.finish();
}

fn bench_reduced_digraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("ReducedDigraph");

    for (size, modulus) in [(4, 2), (6, 2), (6, 3)] {
        let id = format!("{size}/{modulus}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &(size, modulus), |b, &(s, m)| {
            let space = BalancedVectorSpace::new(s, m).unwrap();
            let x = space.elements().next().unwrap();
            b.iter(|| space.reduced_digraph(&x).connected_components().len());
        });
    }
    group.finish();
}

fn bench_rref(c: &mut Criterion) {
    let mut group = c.benchmark_group("RowReduction");

    for (modulus, dimension, size) in [(2, 3, 4), (3, 2, 3), (5, 3, 4)] {
        let id = format!("Z{modulus}^{dimension}/{size}");
        let space = SubsetPairs::new(modulus, dimension).unwrap();
        let subset = space.first_sets(size).next().unwrap().unwrap();
        group.bench_function(id, |b| {
            b.iter(|| linalg::rref(space.ring(), subset.matrix()).unwrap());
        });
    }
    group.finish();
}

fn bench_spectral_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("SpectralSearch");
    group.sample_size(20);

    for (modulus, dimension, size) in [(2, 3, 4), (3, 2, 3), (2, 4, 4)] {
        let id = format!("Z{modulus}^{dimension}/{size}");
        let space = SubsetPairs::new(modulus, dimension).unwrap();
        group.bench_function(id, |b| {
            b.iter(|| space.run_test(size).unwrap());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_balanced_elements,
    bench_reduced_digraph,
    bench_rref,
    bench_spectral_search
);
criterion_main!(benches);
