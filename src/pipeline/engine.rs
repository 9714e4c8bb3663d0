//! Gain and phase stage.
//!
//! Takes the mono voice and the aligned background and produces the four
//! feeds the compositor needs, each already at its final level.

use crate::{
    buffer::AudioBuffer,
    dsp::{
        channels::NoiseChannels,
        gain::{apply_gain, apply_gain_into},
        phase::invert_into,
    },
    pipeline::MixPlan,
};

/// Gain-adjusted feeds for one render, all the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedSignals {
    pub voice: Vec<f32>,
    pub voice_inverted: Vec<f32>,
    pub noise_left: Vec<f32>,
    pub noise_right: Vec<f32>,
    pub sample_rate: u32,
}

impl ShapedSignals {
    pub fn frame_count(&self) -> usize {
        self.voice.len()
    }
}

/// Apply the plan's gains to the voice and both background feeds, and build
/// the inverted voice.
///
/// `voice` must be mono and `noise` aligned to the same frame count.
pub fn shape(voice: AudioBuffer, noise: &AudioBuffer, plan: &MixPlan) -> ShapedSignals {
    debug_assert_eq!(voice.channels(), 1);
    debug_assert_eq!(voice.frame_count(), noise.frame_count());

    let sample_rate = voice.sample_rate();

    let mut voice = voice.into_samples();
    apply_gain(&mut voice, plan.voice().db());

    let mut voice_inverted = vec![0.0; voice.len()];
    invert_into(&voice, &mut voice_inverted);

    let feeds = NoiseChannels::from_buffer(noise);
    let mut noise_left = vec![0.0; feeds.left.len()];
    apply_gain_into(&feeds.left, plan.noise_left().db(), &mut noise_left);
    let mut noise_right = vec![0.0; feeds.right.len()];
    apply_gain_into(&feeds.right, plan.noise_right().db(), &mut noise_right);

    log::debug!(
        "shaped {} frames: voice {:.2} dB, noise L {:.2} dB, noise R {:.2} dB{}",
        voice.len(),
        plan.voice().db(),
        plan.noise_left().db(),
        plan.noise_right().db(),
        if feeds.is_shared() { " (mono background)" } else { "" }
    );

    ShapedSignals {
        voice,
        voice_inverted,
        noise_left,
        noise_right,
        sample_rate,
    }
}
