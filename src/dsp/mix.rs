//! Overlaying (summing) signals.

/*
Overlay
=======

Overlaying two signals means playing them at the same time. Digitally that
is plain sample-wise addition:

    output[i] = a[i] + b[i]

No weighting happens here. Any level balancing is done beforehand with gain,
so the overlay itself stays a neutral operation: adding silence changes
nothing.

    a:        [ 0.5, -0.2,  0.9]
    silence:  [ 0.0,  0.0,  0.0]
    output:   [ 0.5, -0.2,  0.9]


Clipping Risk
-------------

Two loud signals can sum past full scale:

    a:       [ 0.8,  0.6]
    b:       [ 0.5, -0.9]
    a + b:   [ 1.3, -0.3]   ← 1.3 exceeds full scale

The overlay saturates, so the first sample above becomes 1.0. Summed samples
that stay in range are untouched.


Phase Relationships
-------------------

An inverted copy of a signal overlaid on the original cancels to silence.
The cloaking mix never overlays voice with its own inversion on the same
channel; each channel carries one polarity of the voice plus its own share
of the background.
*/

use crate::dsp::clip::saturate;

/// Sum two signals into `out`, saturating at full scale.
#[inline]
pub fn overlay(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = saturate(sa + sb);
    }
}

/// Add signal B into signal A in place, saturating at full scale.
#[inline]
pub fn overlay_in_place(a: &mut [f32], b: &[f32]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa = saturate(*sa + sb);
    }
}
