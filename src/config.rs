//! Pipeline configuration
//!
//! Settings that stay fixed across requests: the canonical output rate, the
//! resampler quality, the length of the silent background seed, and the
//! default mix. With the `serde` feature the whole struct loads from YAML.
//!
//! ```yaml
//! sample_rate: 48000
//! resample_quality: high
//! silence_seed_secs: 1.0
//! plan:
//!   voice: 100
//!   noise_left: 100
//!   noise_right: 30
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{io::resample::ResampleQuality, pipeline::MixPlan, DEFAULT_SAMPLE_RATE};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct CloakConfig {
    /// Rate every source is converted to before mixing (Hz)
    pub sample_rate: u32,
    pub resample_quality: ResampleQuality,
    /// Length of generated silence when no background is given
    pub silence_seed_secs: f32,
    /// Mix used when the caller does not override volumes
    pub plan: MixPlan,
}

impl Default for CloakConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            resample_quality: ResampleQuality::default(),
            silence_seed_secs: 1.0,
            plan: MixPlan::default(),
        }
    }
}

#[cfg(feature = "serde")]
mod yaml {
    use std::path::Path;

    use super::CloakConfig;
    use crate::{
        error::{CloakError, CloakResult},
        io::loader::MAX_SILENCE_SECS,
    };

    impl CloakConfig {
        /// Parse a YAML document. Missing keys take their defaults.
        pub fn from_yaml(text: &str) -> CloakResult<Self> {
            let config: CloakConfig =
                serde_yaml::from_str(text).map_err(|e| CloakError::Config(e.to_string()))?;
            config.validate()
        }

        /// Load from a YAML file.
        ///
        /// A missing file yields the defaults; a file that exists but does
        /// not parse is an error.
        pub fn load(path: &Path) -> CloakResult<Self> {
            log::info!("load_config: Loading from {:?}", path);

            if !path.exists() {
                log::info!("load_config: Config file doesn't exist, using defaults");
                return Ok(Self::default());
            }

            let text = std::fs::read_to_string(path)?;
            Self::from_yaml(&text)
        }

        fn validate(self) -> CloakResult<Self> {
            if self.sample_rate == 0 {
                return Err(CloakError::Config("sample_rate must be positive".into()));
            }
            if !self.silence_seed_secs.is_finite() {
                return Err(CloakError::Config(
                    "silence_seed_secs must be a finite number".into(),
                ));
            }
            if self.silence_seed_secs > MAX_SILENCE_SECS {
                return Err(CloakError::Config(format!(
                    "silence_seed_secs must be at most {MAX_SILENCE_SECS}"
                )));
            }
            Ok(self)
        }
    }
}
