// Purpose - getting audio in and out: decoding, resampling, encoding

pub mod decoder;
pub mod loader;
pub mod resample;
pub mod sink;

use std::path::{Path, PathBuf};

pub use decoder::{MediaDecoder, SymphoniaDecoder};
pub use loader::SampleLoader;
pub use resample::ResampleQuality;
pub use sink::{encode_wav, OutputSink, WavBytesSink, WavSink};

/// Container/codec hint supplied by whoever received the upload.
///
/// Usually a file extension. The decoder treats it as advice only and still
/// probes the bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatHint(Option<String>);

impl FormatHint {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn extension(ext: impl Into<String>) -> Self {
        let ext = ext.into();
        Self(Some(ext.trim_start_matches('.').to_ascii_lowercase()))
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|e| e.to_str())
            .map(Self::extension)
            .unwrap_or_default()
    }

    pub fn as_extension(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[derive(Debug, Clone)]
pub enum MediaData {
    Bytes(Vec<u8>),
    Path(PathBuf),
}

/// One encoded input: raw bytes or a file, plus what we know about it.
#[derive(Debug, Clone)]
pub struct MediaSource {
    pub data: MediaData,
    pub hint: FormatHint,
    /// Original file name, if the caller had one.
    pub name: Option<String>,
}

impl MediaSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let hint = FormatHint::from_path(&path);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);

        Self {
            data: MediaData::Path(path),
            hint,
            name,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>, hint: FormatHint) -> Self {
        Self {
            data: MediaData::Bytes(bytes),
            hint,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
