// benches/extension.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ulam::core::non_standard_integer::NonStandardInteger;
use ulam::core::ulam_sequence::NonStandardUlamSequence;
use ulam::reference::ulam_terms_up_to;

const BOUND_MULTIPLIERS: &[i64] = &[10, 50, 100];

fn bench_coeff_up_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("Symbolic U(1,N)");

    for &multiplier in BOUND_MULTIPLIERS {
        let bound = multiplier * NonStandardInteger::N;
        group.bench_with_input(BenchmarkId::new("coeff_up_to", multiplier), &bound, |bencher, bound| {
            bencher.iter(|| {
                let mut sequence = NonStandardUlamSequence::new();
                sequence.coeff_up_to(black_box(bound)).map(|blocks| blocks.len()).unwrap_or(0)
            })
        });
    }

    group.finish();
}

fn bench_naive(c: &mut Criterion) {
    let mut group = c.benchmark_group("Direct U(1,N)");

    for &multiplier in BOUND_MULTIPLIERS {
        let n = 20;
        group.bench_with_input(BenchmarkId::new("terms_up_to", multiplier), &multiplier, |bencher, &multiplier| {
            bencher.iter(|| ulam_terms_up_to(black_box(n), multiplier * n).map(|terms| terms.len()).unwrap_or(0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_coeff_up_to, bench_naive);
criterion_main!(benches);
