//! Handing finished stereo buffers to an encoder.

use std::io::{Cursor, Seek, Write};
use std::path::{Path, PathBuf};

use crate::{buffer::StereoResult, dsp::clip::saturate, error::CloakResult};

/// Consumes a finished [`StereoResult`].
///
/// This is where container muxing and encoding live. The crate ships WAV
/// sinks; lossy encoders or video remuxing plug in behind the same trait.
pub trait OutputSink {
    fn consume(&mut self, result: StereoResult) -> CloakResult<()>;
}

fn wav_spec(result: &StereoResult) -> hound::WavSpec {
    hound::WavSpec {
        channels: 2,
        sample_rate: result.sample_rate(),
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

#[inline]
fn to_i16(sample: f32) -> i16 {
    (saturate(sample) * i16::MAX as f32) as i16
}

fn write_wav<W: Write + Seek>(result: &StereoResult, writer: W) -> CloakResult<()> {
    let mut writer = hound::WavWriter::new(writer, wav_spec(result))?;
    for &sample in result.buffer().samples() {
        writer.write_sample(to_i16(sample))?;
    }
    writer.finalize()?;
    Ok(())
}

/// Encode a result as a 16-bit PCM WAV file in memory.
pub fn encode_wav(result: &StereoResult) -> CloakResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_wav(result, Cursor::new(&mut bytes))?;
    Ok(bytes)
}

/// Writes 16-bit PCM WAV to a file.
#[derive(Debug, Clone)]
pub struct WavSink {
    path: PathBuf,
}

impl WavSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for WavSink {
    fn consume(&mut self, result: StereoResult) -> CloakResult<()> {
        let file = std::io::BufWriter::new(std::fs::File::create(&self.path)?);
        write_wav(&result, file)?;
        log::info!(
            "wrote {} frames to {}",
            result.frame_count(),
            self.path.display()
        );
        Ok(())
    }
}

/// Collects the encoded WAV bytes, for callers that stream the response
/// themselves.
#[derive(Debug, Default)]
pub struct WavBytesSink {
    bytes: Option<Vec<u8>>,
}

impl WavBytesSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Option<Vec<u8>> {
        self.bytes.take()
    }
}

impl OutputSink for WavBytesSink {
    fn consume(&mut self, result: StereoResult) -> CloakResult<()> {
        self.bytes = Some(encode_wav(&result)?);
        Ok(())
    }
}
