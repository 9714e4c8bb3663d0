//! Fitting a background track to the length of the voice.

/*
Loop and Truncate
=================

The background is stretched to the voice's length by tiling, never by time
stretching. A short loop repeats from its first frame; a long track is cut.

    voice:  |==================================|        N frames
    noise:  |==========|                                M frames, M < N

    tiled:  |==========|==========|==========|==========|
                                              ^ cut at N
    result: |==========|==========|==========|====|

    repeats = ceil(N / M)

When M >= N the track is simply cut to N frames.

Seam
----

There is no crossfade where the loop wraps. If the last and first frames of
the background do not meet, the jump is audible as a click. That is the
expected output; the tile is a straight copy.
*/

use crate::{
    buffer::AudioBuffer,
    error::{CloakError, CloakResult, SourceRole},
};

/// Tile or cut `noise` so it has exactly `frames` frames.
///
/// Fails with [`CloakError::EmptyBuffer`] when `noise` has no frames.
pub fn loop_to_length(noise: AudioBuffer, frames: usize) -> CloakResult<AudioBuffer> {
    let source_frames = noise.frame_count();
    if source_frames == 0 {
        return Err(CloakError::EmptyBuffer {
            role: SourceRole::Noise,
        });
    }

    let sample_rate = noise.sample_rate();
    let channels = noise.channels();
    let target_len = frames * channels as usize;

    let mut samples = noise.into_samples();
    if source_frames < frames {
        let repeats = frames.div_ceil(source_frames);
        log::debug!(
            "looping background: {source_frames} frames x{repeats} to cover {frames} frames"
        );
        samples = samples.repeat(repeats);
    }
    samples.truncate(target_len);

    AudioBuffer::new(samples, sample_rate, channels)
}

/// Fit `noise` to the frame count of `voice`.
pub fn align_to_voice(voice: &AudioBuffer, noise: AudioBuffer) -> CloakResult<AudioBuffer> {
    loop_to_length(noise, voice.frame_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(frames: usize) -> AudioBuffer {
        AudioBuffer::mono((0..frames).map(|i| i as f32 / frames as f32).collect(), 1_000)
    }

    #[test]
    fn test_short_noise_is_tiled() {
        let noise = ramp(300);
        let original = noise.samples().to_vec();

        let aligned = loop_to_length(noise, 1000).unwrap();

        assert_eq!(aligned.frame_count(), 1000);
        assert_eq!(&aligned.samples()[..300], original.as_slice());
        assert_eq!(&aligned.samples()[300..600], original.as_slice());
        assert_eq!(&aligned.samples()[900..1000], &original[..100]);
    }

    #[test]
    fn test_long_noise_is_truncated() {
        let noise = ramp(500);
        let original = noise.samples().to_vec();

        let aligned = loop_to_length(noise, 120).unwrap();

        assert_eq!(aligned.samples(), &original[..120]);
    }

    #[test]
    fn test_equal_length_unchanged() {
        let noise = ramp(64);
        let aligned = loop_to_length(noise.clone(), 64).unwrap();
        assert_eq!(aligned, noise);
    }

    #[test]
    fn test_stereo_tiles_whole_frames() {
        let noise = AudioBuffer::new(vec![0.1, -0.1, 0.2, -0.2], 44_100, 2).unwrap();
        let aligned = loop_to_length(noise, 3).unwrap();

        assert_eq!(aligned.channels(), 2);
        assert_eq!(aligned.samples(), &[0.1, -0.1, 0.2, -0.2, 0.1, -0.1]);
    }

    #[test]
    fn test_empty_noise_rejected() {
        let noise = AudioBuffer::mono(Vec::new(), 44_100);
        let err = loop_to_length(noise, 10).unwrap_err();
        assert!(matches!(
            err,
            CloakError::EmptyBuffer {
                role: SourceRole::Noise
            }
        ));
    }

    #[test]
    fn test_align_to_voice_matches_frames() {
        let voice = AudioBuffer::mono(vec![0.0; 777], 44_100);
        let noise = AudioBuffer::silence(44_100, 2, 100);

        let aligned = align_to_voice(&voice, noise).unwrap();

        assert_eq!(aligned.frame_count(), voice.frame_count());
    }
}
