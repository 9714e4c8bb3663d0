//! Polarity (phase) inversion.

/*
Phase Inversion
===============

Inverting a signal flips it upside down: every sample x becomes -x.

    Original: [ 0.5,  0.8, -0.3,  0.0]
    Inverted: [-0.5, -0.8,  0.3,  0.0]

For a sine wave this is the same as shifting it by half a period (180°),
which is where the "phase" in the name comes from. For arbitrary signals it
is strictly a polarity flip; nothing is delayed.

Mixed in equal proportion with the original, the inverted copy cancels it:

    x + (-x) = 0

Played on separate channels the two copies do not cancel in the air the same
way, which is what the cloaking mix relies on: one ear gets the voice, the
other gets its mirror image.

Negation is exact in IEEE floats, so inverting twice returns the input
bit-for-bit.
*/

use crate::buffer::AudioBuffer;

/// Negate every sample in place.
#[inline]
pub fn invert_in_place(signal: &mut [f32]) {
    for sample in signal.iter_mut() {
        *sample = -*sample;
    }
}

/// Write the negation of `signal` into `out`.
#[inline]
pub fn invert_into(signal: &[f32], out: &mut [f32]) {
    debug_assert_eq!(signal.len(), out.len());

    for (o, &s) in out.iter_mut().zip(signal.iter()) {
        *o = -s;
    }
}

/// Invert a whole buffer. Rate, channel count and frame count are unchanged.
pub fn invert_phase(mut buffer: AudioBuffer) -> AudioBuffer {
    invert_in_place(buffer.samples_mut());
    buffer
}
