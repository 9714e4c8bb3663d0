//! Channel layout helpers: down-mixing, splitting and interleaving.

use std::borrow::Cow;

use crate::{
    buffer::{AudioBuffer, StereoResult},
    error::CloakResult,
};

/// Collapse a buffer to one channel by averaging each frame.
///
/// Mono input is returned as-is. Stereo placement is discarded.
pub fn downmix_to_mono(buffer: AudioBuffer) -> AudioBuffer {
    if buffer.channels() == 1 {
        return buffer;
    }

    let sample_rate = buffer.sample_rate();
    let channels = buffer.channels() as usize;
    let mono = average_frames(buffer.samples(), channels);
    AudioBuffer::mono(mono, sample_rate)
}

/// Average each interleaved frame of `channels` samples into one sample.
pub fn average_frames(interleaved: &[f32], channels: usize) -> Vec<f32> {
    let scale = 1.0 / channels as f32;
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() * scale)
        .collect()
}

/// Keep only the first two channels of wider interleaved material.
///
/// Input with one or two channels passes through untouched.
pub fn keep_front_pair(interleaved: Vec<f32>, channels: usize) -> (Vec<f32>, u16) {
    match channels {
        0 => (Vec::new(), 1),
        1 | 2 => (interleaved, channels as u16),
        _ => {
            let pair = interleaved
                .chunks_exact(channels)
                .flat_map(|frame| [frame[0], frame[1]])
                .collect();
            (pair, 2)
        }
    }
}

/// Left and right feeds derived from a background buffer.
///
/// Mono material feeds both sides from the same borrowed slice; stereo
/// material is split into two owned channels.
#[derive(Debug)]
pub struct NoiseChannels<'a> {
    pub left: Cow<'a, [f32]>,
    pub right: Cow<'a, [f32]>,
}

impl<'a> NoiseChannels<'a> {
    pub fn from_buffer(buffer: &'a AudioBuffer) -> Self {
        if buffer.channels() == 1 {
            return Self {
                left: Cow::Borrowed(buffer.samples()),
                right: Cow::Borrowed(buffer.samples()),
            };
        }

        let (left, right) = deinterleave_stereo(buffer.samples());
        Self {
            left: Cow::Owned(left),
            right: Cow::Owned(right),
        }
    }

    /// True when both sides read the same mono signal.
    pub fn is_shared(&self) -> bool {
        match (&self.left, &self.right) {
            (Cow::Borrowed(l), Cow::Borrowed(r)) => std::ptr::eq(*l, *r),
            _ => false,
        }
    }
}

/// Split interleaved stereo into separate left and right vectors.
pub fn deinterleave_stereo(interleaved: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let frames = interleaved.len() / 2;
    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);

    for frame in interleaved.chunks_exact(2) {
        left.push(frame[0]);
        right.push(frame[1]);
    }

    (left, right)
}

/// Interleave two equal-length channels into a stereo result.
pub fn interleave_stereo(left: &[f32], right: &[f32], sample_rate: u32) -> CloakResult<StereoResult> {
    debug_assert_eq!(left.len(), right.len());

    let mut samples = Vec::with_capacity(left.len() * 2);
    for (&l, &r) in left.iter().zip(right.iter()) {
        samples.push(l);
        samples.push(r);
    }

    StereoResult::new(AudioBuffer::new(samples, sample_rate, 2)?)
}
