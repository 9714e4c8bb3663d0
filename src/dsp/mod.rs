//! Sample-level DSP primitives used by the cloaking pipeline.
//!
//! Everything here works on plain `f32` slices or owned [`AudioBuffer`]s and
//! keeps to the signal-processing math, so the pipeline layer only has to
//! decide what gets mixed with what.
//!
//! [`AudioBuffer`]: crate::buffer::AudioBuffer

/// Tiling a background track to the voice length.
pub mod align;
/// Down-mixing, channel splitting and interleaving.
pub mod channels;
/// Full-scale saturation.
pub mod clip;
/// Percentage volume and decibel gain.
pub mod gain;
/// Sample-wise overlay of two signals.
pub mod mix;
/// Reference tone generation.
pub mod oscillator;
/// Polarity inversion.
pub mod phase;

pub use gain::GainSpec;
