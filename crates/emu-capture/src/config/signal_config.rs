use crate::config::{
    DEFAULT_BLOCK_FRAMES, DEFAULT_DURATION_SECS, DEFAULT_FREQUENCY_HZ, default_block_frames,
    default_duration_secs, default_frequency_hz,
};

use serde::{Deserialize, Serialize};

/// Test signal fed through the session in place of emulator output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// Square wave frequency in Hz.
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: f64,

    /// Length of the recording in seconds.
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f64,

    /// Frames per block handed to each audio write.
    #[serde(default = "default_block_frames")]
    pub block_frames: usize,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            frequency_hz: DEFAULT_FREQUENCY_HZ,
            duration_secs: DEFAULT_DURATION_SECS,
            block_frames: DEFAULT_BLOCK_FRAMES,
        }
    }
}
