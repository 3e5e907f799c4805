use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use finite_automata::{
    prelude::*,
    random::{generate_random_dfa, generate_random_nfa},
};

fn bench_determinize(c: &mut Criterion) {
    let mut group = c.benchmark_group("nfa_to_dfa");
    for size in [4, 8, 12] {
        fastrand::seed(size as u64);
        let nfa = generate_random_nfa(2, size, 0.2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &nfa, |b, nfa| {
            b.iter(|| std::hint::black_box(nfa_to_dfa(nfa)))
        });
    }
    group.finish();
}

fn bench_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimize");
    for size in [16, 64, 128] {
        fastrand::seed(size as u64);
        let dfa = generate_random_dfa(3, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &dfa, |b, dfa| {
            b.iter(|| std::hint::black_box(dfa.minimize()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_determinize, bench_minimize);
criterion_main!(benches);
