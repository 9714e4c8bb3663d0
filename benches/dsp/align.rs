//! Benchmarks for looping a background to the voice length.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use cloak_dsp::{dsp::align, AudioBuffer};

use crate::CLIP_SIZES;

pub fn bench_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/align");

    // A 0.3 s stereo loop, tiled out to each clip length
    let loop_frames = 13_230;
    let noise = AudioBuffer::new(
        (0..loop_frames * 2).map(|i| (i as f32 * 0.01).sin() * 0.2).collect(),
        44_100,
        2,
    )
    .expect("valid stereo buffer");

    for &size in CLIP_SIZES {
        group.bench_with_input(BenchmarkId::new("loop_to_length", size), &size, |b, &size| {
            b.iter(|| align::loop_to_length(black_box(noise.clone()), black_box(size)))
        });
    }

    group.finish();
}
