//! Full-scale saturation.
//!
//! Every stage that can push a sample past full scale (gain above unity,
//! summing two signals) runs its result through [`saturate`]. This is a hard
//! clip: the transfer function is linear inside the range and flat outside.
//!
//!   f(x) = clamp(x, -1.0, 1.0)
//!
//! A hard clip keeps samples that are already in range bit-identical, which
//! is what lets `overlay(a, silence) == a` and the phase-inversion round trip
//! hold exactly.

/// Largest magnitude a sample may take.
pub const FULL_SCALE: f32 = 1.0;

/// Clamp a sample into `[-FULL_SCALE, FULL_SCALE]`.
#[inline]
pub fn saturate(sample: f32) -> f32 {
    sample.clamp(-FULL_SCALE, FULL_SCALE)
}

/// Clamp a whole buffer in place.
pub fn saturate_buffer(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = saturate(*sample);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_saturate_in_range_untouched() {
        assert_eq!(saturate(0.3), 0.3);
        assert_eq!(saturate(-1.0), -1.0);
    }

    #[test]
    fn test_saturate_clamps() {
        assert_eq!(saturate(1.6), 1.0);
        assert_eq!(saturate(-3.0), -1.0);
    }

    #[test]
    fn test_saturate_buffer() {
        let mut buffer = [2.0, 0.5, -2.0];
        saturate_buffer(&mut buffer);
        assert_eq!(buffer, [1.0, 0.5, -1.0]);
    }
}
