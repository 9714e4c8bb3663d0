//! Benchmarks for polarity inversion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use cloak_dsp::dsp::phase;

use crate::CLIP_SIZES;

pub fn bench_phase(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/phase");

    for &size in CLIP_SIZES {
        let signal: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let mut output = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("invert_into", size), &size, |b, _| {
            b.iter(|| phase::invert_into(black_box(&signal), black_box(&mut output)))
        });

        let mut buffer = signal.clone();
        group.bench_with_input(BenchmarkId::new("invert_in_place", size), &size, |b, _| {
            b.iter(|| phase::invert_in_place(black_box(&mut buffer)))
        });
    }

    group.finish();
}
