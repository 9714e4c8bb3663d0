//! Benchmarks for full pipeline renders.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use cloak_dsp::{
    dsp::oscillator::sine_tone, AudioBuffer, CloakConfig, CloakPipeline, MixPlan,
};

use crate::CLIP_SIZES;

pub fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/render");
    let pipeline = CloakPipeline::symphonia(CloakConfig::default());
    let plan = MixPlan::default();

    for &size in CLIP_SIZES {
        let secs = size as f32 / 44_100.0;
        let voice = sine_tone(220.0, 0.8, 44_100, secs);

        // === No background: silence seed looped ===
        group.bench_with_input(BenchmarkId::new("voice_only", size), &size, |b, _| {
            b.iter(|| {
                pipeline
                    .render(black_box(voice.clone()), None, black_box(&plan))
                    .expect("render")
            })
        });

        // === Short stereo background, tiled ===
        let noise = AudioBuffer::new(
            (0..22_050 * 2).map(|i| (i as f32 * 0.003).sin() * 0.4).collect(),
            44_100,
            2,
        )
        .expect("valid stereo buffer");

        group.bench_with_input(BenchmarkId::new("stereo_background", size), &size, |b, _| {
            b.iter(|| {
                pipeline
                    .render(
                        black_box(voice.clone()),
                        Some(black_box(noise.clone())),
                        black_box(&plan),
                    )
                    .expect("render")
            })
        });
    }

    group.finish();
}
