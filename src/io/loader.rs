//! Loading voice and background sources at the pipeline's canonical rate.

use crate::{
    buffer::AudioBuffer,
    dsp::clip::saturate_buffer,
    error::{CloakError, CloakResult, SourceRole},
    io::{
        decoder::MediaDecoder,
        resample::{resample, ResampleQuality},
        MediaSource,
    },
};

/// Shortest silent background produced when no noise track is supplied.
pub const MIN_SILENCE_SECS: f32 = 1.0;

/// Longest silent background the loader will allocate.
pub const MAX_SILENCE_SECS: f32 = 3_600.0;

/// Decodes sources through a [`MediaDecoder`] and brings them to one rate.
///
/// The loader holds no buffers of its own; everything it decodes is handed
/// straight back to the caller, and intermediate decode state is dropped on
/// every return path.
pub struct SampleLoader<'a, D: MediaDecoder + ?Sized> {
    decoder: &'a D,
    sample_rate: u32,
    quality: ResampleQuality,
    silence_secs: f32,
}

impl<'a, D: MediaDecoder + ?Sized> SampleLoader<'a, D> {
    pub fn new(decoder: &'a D, sample_rate: u32) -> Self {
        Self {
            decoder,
            sample_rate: sample_rate.max(1),
            quality: ResampleQuality::default(),
            silence_secs: MIN_SILENCE_SECS,
        }
    }

    pub fn quality(mut self, quality: ResampleQuality) -> Self {
        self.quality = quality;
        self
    }

    /// Length of the silent seed used when no background is supplied.
    /// Values are clamped to `MIN_SILENCE_SECS..=MAX_SILENCE_SECS`.
    pub fn silence_secs(mut self, secs: f32) -> Self {
        self.silence_secs = if secs.is_finite() {
            secs.clamp(MIN_SILENCE_SECS, MAX_SILENCE_SECS)
        } else {
            MIN_SILENCE_SECS
        };
        self
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Decode the voice. A missing source is [`CloakError::MissingInput`].
    pub fn load_voice(&self, source: Option<MediaSource>) -> CloakResult<AudioBuffer> {
        let source = source.ok_or(CloakError::MissingInput)?;
        self.load(source, SourceRole::Voice)
    }

    /// Decode the background, or synthesize stereo silence when absent.
    pub fn load_noise(&self, source: Option<MediaSource>) -> CloakResult<AudioBuffer> {
        match source {
            Some(source) => self.load(source, SourceRole::Noise),
            None => Ok(self.silence()),
        }
    }

    /// The silent stereo seed at the canonical rate.
    pub fn silence(&self) -> AudioBuffer {
        let frames = (self.sample_rate as f32 * self.silence_secs).ceil() as usize;
        log::debug!("no background supplied, seeding {frames} frames of silence");
        AudioBuffer::silence(self.sample_rate, 2, frames)
    }

    fn load(&self, source: MediaSource, role: SourceRole) -> CloakResult<AudioBuffer> {
        let decoded = self.decoder.decode(source, role)?;
        if decoded.is_empty() {
            return Err(CloakError::EmptyBuffer { role });
        }

        let mut buffer = resample(decoded, self.sample_rate, self.quality)?;
        saturate_buffer(buffer.samples_mut());
        Ok(buffer)
    }
}
