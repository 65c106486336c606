use criterion::{criterion_group, criterion_main, Criterion};
use shapescore::{synth, Scorer, Shape};
use std::hint::black_box;
use strum::IntoEnumIterator;

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();

    for shape in Shape::iter() {
        let stroke = synth::ideal(shape);
        c.bench_function(&format!("score {} ({} pts)", shape, stroke.len()), |b| {
            b.iter(|| scorer.score(black_box(shape), black_box(&stroke)))
        });
    }

    // Dense stroke, the size a fast pointer on a large canvas produces.
    let dense = synth::jitter(&synth::circle(300.0, 2000), 1.5, Some(7));
    c.bench_function("score circle (2000 pts)", |b| {
        b.iter(|| scorer.score(black_box(Shape::Circle), black_box(&dense)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
