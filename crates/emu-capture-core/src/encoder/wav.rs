//! WAV sound-file encoder using hound.
//!
//! Accepts the raw PCM blocks produced by the emulator's sound generator:
//! unsigned 8-bit or signed 16-bit little-endian, interleaved by channel.

use crate::{EncoderError, encoder::AudioEncoder};

use std::{
    fs::File,
    io::BufWriter,
    panic::Location,
    path::{Path, PathBuf},
};

use error_location::ErrorLocation;
use hound::{SampleFormat, WavSpec, WavWriter};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub(crate) const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Sample encoding of the incoming PCM blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleWidth {
    /// Unsigned 8-bit, silence at 0x80.
    #[default]
    U8,
    /// Signed 16-bit little-endian.
    S16Le,
}

impl SampleWidth {
    /// Bytes occupied by one sample.
    pub fn bytes(self) -> usize {
        match self {
            SampleWidth::U8 => 1,
            SampleWidth::S16Le => 2,
        }
    }

    fn bits(self) -> u16 {
        match self {
            SampleWidth::U8 => 8,
            SampleWidth::S16Le => 16,
        }
    }
}

/// PCM layout written to new WAV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WavFormat {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of interleaved channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Encoding of each sample.
    pub sample_width: SampleWidth,
}

impl Default for WavFormat {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: 1,
            sample_width: SampleWidth::U8,
        }
    }
}

impl WavFormat {
    /// Bytes occupied by one frame (one sample per channel).
    pub fn block_align(&self) -> usize {
        usize::from(self.channels) * self.sample_width.bytes()
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_width.bits(),
            sample_format: SampleFormat::Int,
        }
    }
}

/// An open WAV file.
pub struct WavHandle {
    writer: WavWriter<BufWriter<File>>,
    path: PathBuf,
}

impl WavHandle {
    /// Path of the file being written.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes sound recordings as PCM WAV files.
#[derive(Debug, Clone, Default)]
pub struct WavEncoder {
    format: WavFormat,
}

impl WavEncoder {
    /// Creates an encoder that writes files in `format`.
    pub fn new(format: WavFormat) -> Self {
        Self { format }
    }

    /// Format used for new files.
    pub fn format(&self) -> WavFormat {
        self.format
    }
}

impl AudioEncoder for WavEncoder {
    type Handle = WavHandle;
    type Error = EncoderError;

    #[track_caller]
    #[instrument(skip(self))]
    fn open(&mut self, path: &Path) -> Result<Self::Handle, Self::Error> {
        if self.format.channels == 0 {
            return Err(EncoderError::InvalidBuffer {
                reason: "format has zero channels".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let writer =
            WavWriter::create(path, self.format.spec()).map_err(|e| EncoderError::Wav {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!(
            sample_rate = self.format.sample_rate,
            channels = self.format.channels,
            sample_width = ?self.format.sample_width,
            "WAV header written"
        );

        Ok(WavHandle {
            writer,
            path: path.to_path_buf(),
        })
    }

    #[track_caller]
    fn write_samples(
        &mut self,
        handle: &mut Self::Handle,
        buffer: &[u8],
    ) -> Result<usize, Self::Error> {
        let block_align = self.format.block_align();
        if buffer.len() % block_align != 0 {
            return Err(EncoderError::InvalidBuffer {
                reason: format!(
                    "{} bytes is not a whole number of {}-byte frames",
                    buffer.len(),
                    block_align
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let result = match self.format.sample_width {
            // hound takes 8-bit samples as signed and stores them offset by 0x80
            SampleWidth::U8 => buffer
                .iter()
                .try_for_each(|&b| handle.writer.write_sample((b ^ 0x80) as i8)),
            SampleWidth::S16Le => buffer.chunks_exact(2).try_for_each(|pair| {
                handle
                    .writer
                    .write_sample(i16::from_le_bytes([pair[0], pair[1]]))
            }),
        };

        result.map_err(|e| EncoderError::Wav {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(buffer.len())
    }

    #[track_caller]
    #[instrument(skip(self, handle), fields(path = ?handle.path))]
    fn close(&mut self, handle: Self::Handle) -> Result<(), Self::Error> {
        let frames = handle.writer.duration();

        handle.writer.finalize().map_err(|e| EncoderError::Wav {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(frames = frames, "WAV file finalized");

        Ok(())
    }
}
