//! Quick level and correlation summary of a finished mix.

use std::fmt;

use crate::{buffer::StereoResult, SILENCE_DB};

/// Peak levels and inter-channel correlation of a [`StereoResult`].
///
/// Correlation runs from -1 (one side is the negation of the other, which is
/// what a cloaked voice over silence looks like) through 0 (unrelated) to +1
/// (identical channels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoReport {
    pub frames: usize,
    pub peak_left_db: f32,
    pub peak_right_db: f32,
    pub correlation: f32,
}

fn peak_db(peak: f32) -> f32 {
    if peak <= 0.0 {
        SILENCE_DB
    } else {
        (20.0 * peak.log10()).max(SILENCE_DB)
    }
}

impl StereoReport {
    pub fn measure(result: &StereoResult) -> Self {
        let mut peak_l = 0.0f32;
        let mut peak_r = 0.0f32;
        let (mut sum_lr, mut sum_ll, mut sum_rr) = (0.0f64, 0.0f64, 0.0f64);

        for (l, r) in result.left().zip(result.right()) {
            peak_l = peak_l.max(l.abs());
            peak_r = peak_r.max(r.abs());

            let (l, r) = (l as f64, r as f64);
            sum_lr += l * r;
            sum_ll += l * l;
            sum_rr += r * r;
        }

        let denom = (sum_ll * sum_rr).sqrt();
        let correlation = if denom > 0.0 { (sum_lr / denom) as f32 } else { 0.0 };

        Self {
            frames: result.frame_count(),
            peak_left_db: peak_db(peak_l),
            peak_right_db: peak_db(peak_r),
            correlation,
        }
    }
}

impl fmt::Display for StereoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames, peak L {:.1} dBFS, peak R {:.1} dBFS, L/R correlation {:+.3}",
            self.frames, self.peak_left_db, self.peak_right_db, self.correlation
        )
    }
}
