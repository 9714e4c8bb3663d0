//! The cloaking pipeline.
//!
//! One request runs four stages strictly in order, each taking ownership of
//! what the previous stage produced:
//!
//! 1. **Load** ([`SampleLoader`]): decode voice and background, bring both to
//!    the canonical rate. No background means one second of stereo silence.
//! 2. **Align** ([`align_to_voice`]): tile or cut the background to the
//!    voice's exact frame count.
//! 3. **Shape** ([`engine::shape`]): down-mix the voice to mono, apply the
//!    three gains, build the inverted voice.
//! 4. **Compose** ([`compositor::compose`]): left = inverted voice + left
//!    background, right = voice + right background.
//!
//! Any error ends the request. Nothing partial is returned and every
//! intermediate buffer is dropped on the way out.
//!
//! # Example
//!
//! ```ignore
//! use cloak_dsp::{io::MediaSource, CloakConfig, CloakPipeline, CloakRequest};
//!
//! let pipeline = CloakPipeline::symphonia(CloakConfig::default());
//! let request = CloakRequest::new(Some(MediaSource::from_path("talk.mp4")))
//!     .noise(Some(MediaSource::from_path("rain.mp3")));
//! let stereo = pipeline.process(request)?;
//! ```
//!
//! [`SampleLoader`]: crate::io::SampleLoader
//! [`align_to_voice`]: crate::dsp::align::align_to_voice

pub mod compositor;
pub mod engine;
pub mod report;

use std::path::Path;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    buffer::{AudioBuffer, StereoResult},
    config::CloakConfig,
    dsp::{align::align_to_voice, channels::downmix_to_mono, gain::GainSpec},
    error::{CloakError, CloakResult, SourceRole},
    io::{
        decoder::{MediaDecoder, SymphoniaDecoder},
        loader::SampleLoader,
        resample::resample,
        MediaSource,
    },
};

pub use report::StereoReport;

/// Form field names for the three volumes.
pub const VOICE_VOLUME_FIELD: &str = "voice_volume";
pub const NOISE_LEFT_VOLUME_FIELD: &str = "noise_left_volume";
pub const NOISE_RIGHT_VOLUME_FIELD: &str = "noise_right_volume";

/// The three volumes for one render. Fixed once built.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixPlan {
    voice: GainSpec,
    noise_left: GainSpec,
    noise_right: GainSpec,
}

impl MixPlan {
    pub const DEFAULT_VOICE_PERCENT: f32 = 100.0;
    pub const DEFAULT_NOISE_LEFT_PERCENT: f32 = 100.0;
    pub const DEFAULT_NOISE_RIGHT_PERCENT: f32 = 30.0;

    pub fn new(voice: GainSpec, noise_left: GainSpec, noise_right: GainSpec) -> Self {
        Self {
            voice,
            noise_left,
            noise_right,
        }
    }

    /// Build a plan from raw form values, falling back to `defaults` for any
    /// that are absent or blank.
    pub fn from_form(
        voice: Option<&str>,
        noise_left: Option<&str>,
        noise_right: Option<&str>,
        defaults: &MixPlan,
    ) -> CloakResult<Self> {
        Ok(Self {
            voice: GainSpec::parse(VOICE_VOLUME_FIELD, voice, defaults.voice)?,
            noise_left: GainSpec::parse(NOISE_LEFT_VOLUME_FIELD, noise_left, defaults.noise_left)?,
            noise_right: GainSpec::parse(
                NOISE_RIGHT_VOLUME_FIELD,
                noise_right,
                defaults.noise_right,
            )?,
        })
    }

    pub fn voice(&self) -> GainSpec {
        self.voice
    }

    pub fn noise_left(&self) -> GainSpec {
        self.noise_left
    }

    pub fn noise_right(&self) -> GainSpec {
        self.noise_right
    }
}

impl Default for MixPlan {
    fn default() -> Self {
        Self {
            voice: GainSpec::from_percent(Self::DEFAULT_VOICE_PERCENT),
            noise_left: GainSpec::from_percent(Self::DEFAULT_NOISE_LEFT_PERCENT),
            noise_right: GainSpec::from_percent(Self::DEFAULT_NOISE_RIGHT_PERCENT),
        }
    }
}

/// Inputs for one run of [`CloakPipeline::process`].
#[derive(Debug, Clone)]
pub struct CloakRequest {
    pub voice: Option<MediaSource>,
    pub noise: Option<MediaSource>,
    pub plan: MixPlan,
}

impl CloakRequest {
    pub fn new(voice: Option<MediaSource>) -> Self {
        Self {
            voice,
            noise: None,
            plan: MixPlan::default(),
        }
    }

    pub fn noise(mut self, noise: Option<MediaSource>) -> Self {
        self.noise = noise;
        self
    }

    pub fn plan(mut self, plan: MixPlan) -> Self {
        self.plan = plan;
        self
    }

    /// File name to offer for the result, derived from the voice upload.
    pub fn suggested_filename(&self) -> String {
        suggested_filename(self.voice.as_ref().and_then(|v| v.name.as_deref()))
    }
}

/// `new_<stem>.wav` for a named upload, `new_cloaked.wav` otherwise.
pub fn suggested_filename(voice_name: Option<&str>) -> String {
    let stem = voice_name
        .and_then(|name| Path::new(name).file_stem())
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("cloaked");
    format!("new_{stem}.wav")
}

/// Runs cloaking requests against an injected decoder.
///
/// The pipeline holds only configuration and the decoder; every buffer lives
/// inside a single call, so one instance can serve concurrent requests.
pub struct CloakPipeline<D: MediaDecoder> {
    decoder: D,
    config: CloakConfig,
}

impl CloakPipeline<SymphoniaDecoder> {
    pub fn symphonia(config: CloakConfig) -> Self {
        Self::new(SymphoniaDecoder::new(), config)
    }
}

impl<D: MediaDecoder> CloakPipeline<D> {
    pub fn new(decoder: D, config: CloakConfig) -> Self {
        Self { decoder, config }
    }

    pub fn config(&self) -> &CloakConfig {
        &self.config
    }

    pub fn loader(&self) -> SampleLoader<'_, D> {
        SampleLoader::new(&self.decoder, self.config.sample_rate)
            .quality(self.config.resample_quality)
            .silence_secs(self.config.silence_seed_secs)
    }

    /// Decode, align, shape and compose one request.
    pub fn process(&self, request: CloakRequest) -> CloakResult<StereoResult> {
        let CloakRequest { voice, noise, plan } = request;

        let loader = self.loader();
        let voice = loader.load_voice(voice)?;
        let noise = loader.load_noise(noise)?;

        let result = self.render(voice, Some(noise), &plan)?;
        if log::log_enabled!(log::Level::Info) {
            log::info!(
                "cloaked @ {} Hz (voice {}%, noise L {}%, noise R {}%): {}",
                result.sample_rate(),
                plan.voice().percent(),
                plan.noise_left().percent(),
                plan.noise_right().percent(),
                StereoReport::measure(&result)
            );
        }
        Ok(result)
    }

    /// Run the mix on already-decoded buffers.
    ///
    /// The output takes the voice's sample rate; a background at another rate
    /// is resampled to match. No background means silence.
    pub fn render(
        &self,
        voice: AudioBuffer,
        noise: Option<AudioBuffer>,
        plan: &MixPlan,
    ) -> CloakResult<StereoResult> {
        if voice.is_empty() {
            return Err(CloakError::EmptyBuffer {
                role: SourceRole::Voice,
            });
        }

        let sample_rate = voice.sample_rate();
        let noise = match noise {
            Some(noise) if noise.sample_rate() != sample_rate => {
                if noise.is_empty() {
                    return Err(CloakError::EmptyBuffer {
                        role: SourceRole::Noise,
                    });
                }
                resample(noise, sample_rate, self.config.resample_quality)?
            }
            Some(noise) => noise,
            None => SampleLoader::new(&self.decoder, sample_rate)
                .silence_secs(self.config.silence_seed_secs)
                .silence(),
        };

        log::debug!(
            "render: voice {} frames x{} ch, background {} frames x{} ch @ {sample_rate} Hz",
            voice.frame_count(),
            voice.channels(),
            noise.frame_count(),
            noise.channels()
        );

        let noise = align_to_voice(&voice, noise)?;
        let voice = downmix_to_mono(voice);
        let shaped = engine::shape(voice, &noise, plan);
        compositor::compose(shaped)
    }
}
