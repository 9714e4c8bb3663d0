pub mod buffer; // Interleaved sample buffers
pub mod config;
pub mod dsp;
pub mod error;
pub mod io;
pub mod pipeline; // Voice/noise cloaking pipeline

pub use buffer::{AudioBuffer, StereoResult};
pub use config::CloakConfig;
pub use error::{CloakError, CloakResult};
pub use pipeline::{CloakPipeline, CloakRequest, MixPlan};

/// Output rate used when the configuration does not say otherwise.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
/// Decibel value standing in for "no signal" so gain math stays finite.
pub const SILENCE_DB: f32 = -100.0;
