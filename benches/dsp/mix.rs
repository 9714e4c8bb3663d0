//! Benchmarks for signal overlay.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use cloak_dsp::dsp::mix;

use crate::CLIP_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in CLIP_SIZES {
        let signal_a: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let signal_b: Vec<f32> = (0..size).map(|i| (i as f32 * 0.15).cos() * 0.3).collect();
        let mut output = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("overlay", size), &size, |b, _| {
            b.iter(|| {
                mix::overlay(
                    black_box(&signal_a),
                    black_box(&signal_b),
                    black_box(&mut output),
                );
            })
        });

        let mut buffer_a = signal_a.clone();
        group.bench_with_input(BenchmarkId::new("overlay_in_place", size), &size, |b, _| {
            b.iter(|| {
                buffer_a.copy_from_slice(&signal_a);
                mix::overlay_in_place(black_box(&mut buffer_a), black_box(&signal_b));
            })
        });
    }

    group.finish();
}
