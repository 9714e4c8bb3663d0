use std::f32::consts::TAU;

use crate::buffer::AudioBuffer;

/// Render `secs` seconds of a mono sine tone at `amplitude` (full scale = 1.0).
///
/// Handy as a reference voice when checking the cloaking mix by ear or in
/// tests: the left channel should come out as the exact negation.
pub fn sine_tone(frequency: f32, amplitude: f32, sample_rate: u32, secs: f32) -> AudioBuffer {
    let frames = (sample_rate as f32 * secs).round() as usize;
    let phase_inc = TAU * frequency / sample_rate as f32;

    let samples = (0..frames)
        .map(|i| amplitude * (phase_inc * i as f32).sin())
        .collect();

    AudioBuffer::mono(samples, sample_rate)
}
