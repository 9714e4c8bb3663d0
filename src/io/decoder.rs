//! Decoding encoded media into sample buffers.
//!
//! The pipeline only sees the [`MediaDecoder`] trait. [`SymphoniaDecoder`] is
//! the stock implementation and handles the common containers (WAV, FLAC,
//! MP3, AAC/MP4, OGG/Vorbis, MKV audio tracks).

use std::fs::File;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource as SymphoniaSource, MediaSourceStream};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::{
    buffer::AudioBuffer,
    dsp::channels::keep_front_pair,
    error::{CloakError, CloakResult, SourceRole},
    io::{MediaData, MediaSource},
};

/// Turns an encoded source into interleaved `f32` samples at the source's
/// native rate, with at most two channels.
pub trait MediaDecoder: Send + Sync {
    fn decode(&self, source: MediaSource, role: SourceRole) -> CloakResult<AudioBuffer>;
}

/// [`MediaDecoder`] backed by Symphonia.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl MediaDecoder for SymphoniaDecoder {
    fn decode(&self, source: MediaSource, role: SourceRole) -> CloakResult<AudioBuffer> {
        let decode_err = |reason: String| CloakError::Decode { role, reason };
        let unsupported = |reason: String| CloakError::UnsupportedFormat { role, reason };

        let stream: Box<dyn SymphoniaSource> = match source.data {
            MediaData::Bytes(bytes) => Box::new(std::io::Cursor::new(bytes)),
            MediaData::Path(path) => Box::new(File::open(&path)?),
        };
        let mss = MediaSourceStream::new(stream, Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = source.hint.as_extension() {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
            .map_err(|e| match e {
                SymphoniaError::Unsupported(what) => unsupported(what.to_string()),
                other => decode_err(other.to_string()),
            })?;

        let mut format = probed.format;

        // Video containers carry other tracks; take the first audio one
        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| unsupported("no audio track found".to_string()))?;

        let track_id = track.id;
        let mut sample_rate = track.codec_params.sample_rate;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| unsupported(e.to_string()))?;

        let mut samples: Vec<f32> = Vec::new();
        let mut channels = 0usize;
        let mut sample_buf: Option<(SampleBuffer<f32>, usize)> = None;

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) if samples.is_empty() => return Err(decode_err(e.to_string())),
                Err(e) => {
                    log::warn!("{role}: stopped reading packets early: {e}");
                    break;
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(SymphoniaError::DecodeError(e)) => {
                    log::warn!("{role}: skipping corrupt packet: {e}");
                    continue;
                }
                Err(e) => return Err(decode_err(e.to_string())),
            };

            let spec = *decoded.spec();
            channels = spec.channels.count();
            sample_rate = Some(spec.rate);

            // Packets may grow; reallocate rather than overrun the scratch buffer
            let frames = decoded.capacity();
            let needs_alloc = sample_buf
                .as_ref()
                .map_or(true, |(_, capacity)| *capacity < frames);
            if needs_alloc {
                sample_buf = Some((SampleBuffer::new(frames as u64, spec), frames));
            }

            if let Some((buf, _)) = sample_buf.as_mut() {
                buf.copy_interleaved_ref(decoded);
                samples.extend_from_slice(buf.samples());
            }
        }

        if samples.is_empty() || channels == 0 {
            return Err(CloakError::EmptyBuffer { role });
        }

        let sample_rate =
            sample_rate.ok_or_else(|| unsupported("unknown sample rate".to_string()))?;
        let source_channels = channels;
        let (samples, channels) = keep_front_pair(samples, channels);

        log::debug!(
            "{role}: decoded {} frames at {sample_rate} Hz ({source_channels} -> {channels} ch)",
            samples.len() / channels as usize
        );

        AudioBuffer::new(samples, sample_rate, channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::FormatHint;

    #[test]
    fn test_garbage_bytes_rejected() {
        let source = MediaSource::from_bytes(b"definitely not audio".to_vec(), FormatHint::none());
        let err = SymphoniaDecoder::new()
            .decode(source, SourceRole::Voice)
            .unwrap_err();

        assert!(matches!(
            err,
            CloakError::UnsupportedFormat { role: SourceRole::Voice, .. }
                | CloakError::Decode { role: SourceRole::Voice, .. }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = MediaSource::from_path("/nonexistent/cloak/voice.wav");
        let err = SymphoniaDecoder::new()
            .decode(source, SourceRole::Voice)
            .unwrap_err();

        assert!(matches!(err, CloakError::Io(_)));
    }
}
