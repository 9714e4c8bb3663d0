//! Benchmarks for decibel gain.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use cloak_dsp::dsp::gain::{self, db_from_percent};

use crate::CLIP_SIZES;

pub fn bench_gain(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/gain");

    for &size in CLIP_SIZES {
        let signal: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();
        let mut output = vec![0.0f32; size];

        let mut signal_copy = signal.clone();
        group.bench_with_input(BenchmarkId::new("apply_gain", size), &size, |b, _| {
            b.iter(|| {
                signal_copy.copy_from_slice(&signal);
                gain::apply_gain(black_box(&mut signal_copy), black_box(db_from_percent(30.0)))
            })
        });

        // Above unity every sample goes through the saturator
        let mut signal_copy = signal.clone();
        group.bench_with_input(BenchmarkId::new("apply_gain_boost", size), &size, |b, _| {
            b.iter(|| {
                signal_copy.copy_from_slice(&signal);
                gain::apply_gain(black_box(&mut signal_copy), black_box(db_from_percent(200.0)))
            })
        });

        group.bench_with_input(BenchmarkId::new("apply_gain_into", size), &size, |b, _| {
            b.iter(|| {
                gain::apply_gain_into(
                    black_box(&signal),
                    black_box(db_from_percent(50.0)),
                    black_box(&mut output),
                )
            })
        });
    }

    group.finish();
}
