//! Error types for the cloaking pipeline

use std::fmt;

use thiserror::Error;

/// Which input a buffer or source was meant to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRole {
    Voice,
    Noise,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRole::Voice => f.write_str("voice"),
            SourceRole::Noise => f.write_str("noise"),
        }
    }
}

/// Errors that can occur while producing a cloaked stereo buffer.
///
/// Every variant is fatal to the request that raised it; nothing inside the
/// pipeline retries or returns partial output.
#[derive(Error, Debug)]
pub enum CloakError {
    /// Required voice source was not supplied
    #[error("No voice file was provided")]
    MissingInput,

    /// Source bytes could not be parsed as audio
    #[error("Failed to decode {role} audio: {reason}")]
    Decode { role: SourceRole, reason: String },

    /// Container or codec not recognized
    #[error("Unsupported {role} format: {reason}")]
    UnsupportedFormat { role: SourceRole, reason: String },

    /// Source decoded to zero frames
    #[error("The {role} audio contains no samples")]
    EmptyBuffer { role: SourceRole },

    /// Volume parameter could not be read as a finite number
    #[error("Invalid value for {name}: {value:?}")]
    InvalidParameter { name: String, value: String },

    /// Sample vector does not describe whole frames
    #[error("Invalid audio buffer: {0}")]
    InvalidBuffer(String),

    /// Sample-rate conversion failed
    #[error("Resampling failed: {0}")]
    Resample(String),

    /// Output encoding failed
    #[error("Failed to encode output: {0}")]
    Encode(#[from] hound::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for cloaking operations
pub type CloakResult<T> = Result<T, CloakError>;
