use crate::config::{DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE, default_channels, default_sample_rate};

use emu_capture_core::{SampleWidth, WavFormat};
use serde::{Deserialize, Serialize};

/// PCM layout of recorded sound files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Number of channels (1 = mono, 2 = stereo).
    #[serde(default = "default_channels")]
    pub channels: u16,

    /// Sample encoding ("u8" or "s16le").
    #[serde(default)]
    pub sample_width: SampleWidth,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
            sample_width: SampleWidth::default(),
        }
    }
}

impl SoundConfig {
    /// WAV format handed to the encoder.
    pub fn format(&self) -> WavFormat {
        WavFormat {
            sample_rate: self.sample_rate,
            channels: self.channels,
            sample_width: self.sample_width,
        }
    }
}
