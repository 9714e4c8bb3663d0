//! Building the two output channels.
//!
//!   left  = inverted voice + left background feed
//!   right = voice          + right background feed
//!
//! The pairing is fixed. Swapping which side carries the inverted voice, or
//! which background gain goes with which side, produces a different mix.

use crate::{
    buffer::StereoResult,
    dsp::{channels::interleave_stereo, mix::overlay_in_place},
    error::CloakResult,
    pipeline::engine::ShapedSignals,
};

/// Overlay the shaped feeds and interleave them into the final stereo buffer.
pub fn compose(signals: ShapedSignals) -> CloakResult<StereoResult> {
    let ShapedSignals {
        voice,
        voice_inverted,
        noise_left,
        noise_right,
        sample_rate,
    } = signals;

    let mut left = voice_inverted;
    overlay_in_place(&mut left, &noise_left);

    let mut right = voice;
    overlay_in_place(&mut right, &noise_right);

    interleave_stereo(&left, &right, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signals(voice: Vec<f32>, left: Vec<f32>, right: Vec<f32>) -> ShapedSignals {
        let voice_inverted = voice.iter().map(|s| -s).collect();
        ShapedSignals {
            voice,
            voice_inverted,
            noise_left: left,
            noise_right: right,
            sample_rate: 44_100,
        }
    }

    #[test]
    fn test_left_is_inverted_voice_plus_left_noise() {
        let result = compose(signals(vec![0.5, 0.25], vec![0.1, 0.1], vec![0.0, 0.0])).unwrap();

        let left: Vec<f32> = result.left().collect();
        assert!((left[0] - (-0.4)).abs() < 1e-6);
        assert!((left[1] - (-0.15)).abs() < 1e-6);
    }

    #[test]
    fn test_right_is_voice_plus_right_noise() {
        let result = compose(signals(vec![0.5, 0.25], vec![0.0, 0.0], vec![0.25, -0.25])).unwrap();

        assert_eq!(result.right().collect::<Vec<_>>(), vec![0.75, 0.0]);
    }

    #[test]
    fn test_silent_noise_leaves_pure_voice() {
        let voice = vec![0.3, -0.6, 0.9];
        let result = compose(signals(voice.clone(), vec![0.0; 3], vec![0.0; 3])).unwrap();

        assert_eq!(result.right().collect::<Vec<_>>(), voice);
        assert_eq!(
            result.left().collect::<Vec<_>>(),
            voice.iter().map(|s| -s).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_sum_saturates() {
        let result = compose(signals(vec![0.9], vec![-0.5], vec![0.5])).unwrap();

        assert_eq!(result.left().next(), Some(-1.0));
        assert_eq!(result.right().next(), Some(1.0));
    }

    #[test]
    fn test_frame_count_unchanged() {
        let result = compose(signals(vec![0.0; 17], vec![0.0; 17], vec![0.0; 17])).unwrap();
        assert_eq!(result.frame_count(), 17);
        assert_eq!(result.buffer().channels(), 2);
    }
}
