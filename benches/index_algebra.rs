use criterion::{criterion_group, criterion_main, Criterion};
use cvxr::prelude::*;
use std::hint::black_box;

fn wide_labels(n: usize) -> LabelSet {
    LabelSet::new((0..n).map(|i| format!("l{}", i))).unwrap()
}

fn bench_sum_indexes(c: &mut Criterion) {
    let labels = wide_labels(1000);
    let operands: Vec<(Option<&LabelSet>, Option<&LabelSet>)> =
        (0..8).map(|_| (Some(&labels), None)).collect();

    c.bench_function("sum_indexes_8x1000", |b| {
        b.iter(|| sum_indexes(black_box(&operands)).unwrap())
    });
}

fn bench_mul_indexes(c: &mut Criterion) {
    let rows = wide_labels(500);
    let inner = wide_labels(1000);
    let cols = wide_labels(200);
    let lh_shape = Shape::new(500, 1000);
    let rh_shape = Shape::new(1000, 200);

    c.bench_function("mul_indexes_inner_1000", |b| {
        b.iter(|| {
            mul_indexes(
                black_box((Some(&rows), Some(&inner))),
                black_box((Some(&inner), Some(&cols))),
                lh_shape,
                rh_shape,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_sum_indexes, bench_mul_indexes);
criterion_main!(benches);
