//! Sample-rate conversion to the pipeline's canonical rate, using rubato.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rubato::{
    Resampler, SincFixedIn, SincInterpolationParameters, SincInterpolationType, WindowFunction,
};

use crate::{
    buffer::AudioBuffer,
    dsp::channels::deinterleave_stereo,
    error::{CloakError, CloakResult},
};

/// Resampling quality preset
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResampleQuality {
    /// Short sinc, linear interpolation
    Fast,
    #[default]
    Normal,
    /// Long sinc, cubic interpolation
    High,
}

impl ResampleQuality {
    fn params(self) -> SincInterpolationParameters {
        let (sinc_len, oversampling_factor, interpolation) = match self {
            ResampleQuality::Fast => (64, 64, SincInterpolationType::Linear),
            ResampleQuality::Normal => (128, 128, SincInterpolationType::Linear),
            ResampleQuality::High => (256, 256, SincInterpolationType::Cubic),
        };

        SincInterpolationParameters {
            sinc_len,
            f_cutoff: 0.95,
            interpolation,
            oversampling_factor,
            window: WindowFunction::BlackmanHarris2,
        }
    }
}

/// Convert `buffer` to `target_rate`. A buffer already at that rate is
/// returned untouched.
///
/// The output has `round(frames * target / source)` frames and is aligned
/// with the input: output frame `n` sits at input time `n * source / target`.
pub fn resample(
    buffer: AudioBuffer,
    target_rate: u32,
    quality: ResampleQuality,
) -> CloakResult<AudioBuffer> {
    let source_rate = buffer.sample_rate();
    if source_rate == target_rate || buffer.is_empty() {
        return Ok(buffer.with_sample_rate(target_rate));
    }

    let ratio = target_rate as f64 / source_rate as f64;
    let channels = buffer.channels() as usize;
    let frames = buffer.frame_count();
    let expected = (frames as f64 * ratio).round() as usize;

    log::debug!("resampling {frames} frames {source_rate} Hz -> {target_rate} Hz ({quality:?})");

    let waves_in: Vec<Vec<f32>> = if channels == 1 {
        vec![buffer.into_samples()]
    } else {
        let (left, right) = deinterleave_stereo(buffer.samples());
        vec![left, right]
    };

    let params = quality.params();
    // SincFixedIn starts its first chunk at input time zero, but each call
    // only reaches half a sinc length short of the chunk end.
    let max_flushes = params.sinc_len.div_ceil(frames) + 2;

    let mut resampler = SincFixedIn::<f32>::new(ratio, 1.0, params, frames, channels)
        .map_err(|e| CloakError::Resample(e.to_string()))?;

    let mut waves_out = resampler
        .process(&waves_in, None)
        .map_err(|e| CloakError::Resample(e.to_string()))?;

    // Flush with silence until the last input frames make it out
    let mut flushes = 0;
    while waves_out[0].len() < expected && flushes < max_flushes {
        let tail = resampler
            .process_partial(None::<&[Vec<f32>]>, None)
            .map_err(|e| CloakError::Resample(e.to_string()))?;
        for (wave, rest) in waves_out.iter_mut().zip(tail) {
            wave.extend(rest);
        }
        flushes += 1;
    }

    for wave in waves_out.iter_mut() {
        wave.resize(expected, 0.0);
    }

    let samples = if channels == 1 {
        waves_out.swap_remove(0)
    } else {
        let mut interleaved = Vec::with_capacity(expected * 2);
        for (&l, &r) in waves_out[0].iter().zip(waves_out[1].iter()) {
            interleaved.push(l);
            interleaved.push(r);
        }
        interleaved
    };

    AudioBuffer::new(samples, target_rate, channels as u16)
}
