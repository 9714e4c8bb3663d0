//! Percentage volume controls and decibel gain.

/*
Volume as Gain
==============

Callers describe loudness as a percentage of the source level: 100% leaves a
signal untouched, 50% makes it quieter, 200% makes it louder. Internally the
percentage is turned into decibels and then into a multiplier.

Vocabulary
----------

  percent       The caller-facing volume, nominally 0..=200.
                  0%   →  silence
                  100% →  unity
                  200% →  louder

  dB            Logarithmic level change. 0 dB is unity.

  gain          The linear multiplier applied to every sample.


The Law
-------

    dB   = 20 × log₁₀(percent / 100)
    gain = 10^(dB / 20)

Reference points:

    percent      dB        gain
    -------   --------    ------
      200%    +6.02 dB    ×2.0
      100%     0.00 dB    ×1.0
       50%    -6.02 dB    ×0.5
       30%   -10.46 dB    ×0.3
        0%  -100.00 dB    ×0.00001   (floor, see below)

Round-tripping through decibels lands back on percent / 100, so the law is
the plain amplitude ratio. Doing it in dB keeps the numbers comparable with
what audio tools show and gives a single place to put the silence floor.


Silence Floor
-------------

log₁₀(0) is -∞. Rather than let infinities leak into the math, anything at
or below 0% maps to -100 dB. That is a gain of 1e-5: a full-scale sample
becomes 0.00001, far below the quietest step of 16-bit audio (≈ 3e-5).


Saturation
----------

Gains above unity can push samples past full scale. `apply_gain` clamps the
result back into [-1.0, 1.0] instead of letting it run off.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    dsp::clip::saturate,
    error::{CloakError, CloakResult},
    SILENCE_DB,
};

/// Convert a volume percentage to decibels.
///
/// `p <= 0` (and NaN) maps to [`SILENCE_DB`], `p == 100` is exactly 0 dB.
#[inline]
pub fn db_from_percent(percent: f32) -> f32 {
    if percent.is_nan() || percent <= 0.0 {
        SILENCE_DB
    } else if percent == 100.0 {
        0.0
    } else {
        20.0 * (percent / 100.0).log10()
    }
}

/// Convert decibels to a linear multiplier.
#[inline]
pub fn db_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Multiply every sample by the gain for `db`, saturating at full scale.
#[inline]
pub fn apply_gain(signal: &mut [f32], db: f32) {
    if db == 0.0 {
        return;
    }

    let gain = db_to_gain(db);
    for sample in signal.iter_mut() {
        *sample = saturate(*sample * gain);
    }
}

/// Copy `signal` into `out` with the gain for `db` applied.
#[inline]
pub fn apply_gain_into(signal: &[f32], db: f32, out: &mut [f32]) {
    debug_assert_eq!(signal.len(), out.len());

    let gain = db_to_gain(db);
    for (o, &s) in out.iter_mut().zip(signal.iter()) {
        *o = saturate(s * gain);
    }
}

/// A caller-supplied volume percentage.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainSpec {
    percent: f32,
}

impl GainSpec {
    pub const UNITY: GainSpec = GainSpec { percent: 100.0 };

    pub fn from_percent(percent: f32) -> Self {
        Self { percent }
    }

    /// Parse a raw form/CLI value.
    ///
    /// `None` or a blank string yields `default`. Anything that is not a
    /// finite number is an [`CloakError::InvalidParameter`] naming `name`.
    pub fn parse(name: &str, raw: Option<&str>, default: GainSpec) -> CloakResult<Self> {
        let Some(text) = raw.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(default);
        };

        match text.parse::<f32>() {
            Ok(percent) if percent.is_finite() => Ok(Self { percent }),
            _ => Err(CloakError::InvalidParameter {
                name: name.to_string(),
                value: text.to_string(),
            }),
        }
    }

    pub fn percent(&self) -> f32 {
        self.percent
    }

    pub fn db(&self) -> f32 {
        db_from_percent(self.percent)
    }

    pub fn linear(&self) -> f32 {
        db_to_gain(self.db())
    }
}

impl Default for GainSpec {
    fn default() -> Self {
        Self::UNITY
    }
}
