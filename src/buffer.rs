//! Interleaved audio buffers passed between pipeline stages.
//!
//! A buffer owns its samples outright. Stages take buffers by value and hand
//! new ones forward, so nothing is shared or mutated behind another stage's
//! back.

use crate::error::{CloakError, CloakResult};

/// Interleaved `f32` samples at full scale `[-1.0, 1.0]`.
///
/// Invariant: `samples.len() == frame_count() * channels()`, with one or two
/// channels and a non-zero sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl AudioBuffer {
    /// Wrap interleaved samples, validating the frame layout.
    pub fn new(samples: Vec<f32>, sample_rate: u32, channels: u16) -> CloakResult<Self> {
        if sample_rate == 0 {
            return Err(CloakError::InvalidBuffer("sample rate must be positive".into()));
        }
        if !(1..=2).contains(&channels) {
            return Err(CloakError::InvalidBuffer(format!(
                "expected 1 or 2 channels, got {channels}"
            )));
        }
        if samples.len() % channels as usize != 0 {
            return Err(CloakError::InvalidBuffer(format!(
                "{} samples do not divide into {channels}-channel frames",
                samples.len()
            )));
        }

        Ok(Self {
            samples,
            sample_rate,
            channels,
        })
    }

    /// Single-channel buffer. A zero rate is bumped to 1 Hz.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate: sample_rate.max(1),
            channels: 1,
        }
    }

    /// All-zero buffer of `frames` frames.
    pub fn silence(sample_rate: u32, channels: u16, frames: usize) -> Self {
        let channels = channels.clamp(1, 2);
        Self {
            samples: vec![0.0; frames * channels as usize],
            sample_rate: sample_rate.max(1),
            channels,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frame_count(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Same samples, different rate. Used after resampling.
    pub(crate) fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate.max(1);
        self
    }
}

/// Final two-channel output of one cloaking run.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoResult {
    buffer: AudioBuffer,
}

impl StereoResult {
    /// Wrap an interleaved stereo buffer. Fails if it is not two-channel.
    pub fn new(buffer: AudioBuffer) -> CloakResult<Self> {
        if buffer.channels() != 2 {
            return Err(CloakError::InvalidBuffer(format!(
                "stereo result needs 2 channels, got {}",
                buffer.channels()
            )));
        }
        Ok(Self { buffer })
    }

    pub fn buffer(&self) -> &AudioBuffer {
        &self.buffer
    }

    pub fn into_buffer(self) -> AudioBuffer {
        self.buffer
    }

    pub fn sample_rate(&self) -> u32 {
        self.buffer.sample_rate()
    }

    pub fn frame_count(&self) -> usize {
        self.buffer.frame_count()
    }

    /// Left channel samples, de-interleaved on the fly.
    pub fn left(&self) -> impl Iterator<Item = f32> + '_ {
        self.buffer.samples().iter().step_by(2).copied()
    }

    /// Right channel samples, de-interleaved on the fly.
    pub fn right(&self) -> impl Iterator<Item = f32> + '_ {
        self.buffer.samples().iter().skip(1).step_by(2).copied()
    }
}
