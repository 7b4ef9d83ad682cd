mod recording_config;
mod signal_config;
mod sound_config;
#[allow(clippy::module_inception)]
mod config;

pub(crate) use {
    config::Config, recording_config::RecordingConfig, signal_config::SignalConfig,
    sound_config::SoundConfig,
};

pub(crate) const DEFAULT_FILE_PREFIX: &str = "capture";
pub(crate) const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub(crate) const DEFAULT_CHANNELS: u16 = 1;
pub(crate) const DEFAULT_FREQUENCY_HZ: f64 = 440.0;
pub(crate) const DEFAULT_DURATION_SECS: f64 = 2.0;
pub(crate) const DEFAULT_BLOCK_FRAMES: usize = 1024;

/// Highest numbered output file before naming gives up (`capture999.wav`).
pub(crate) const MAX_FILE_INDEX: u32 = 999;

pub(crate) fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

pub(crate) fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

pub(crate) fn default_channels() -> u16 {
    DEFAULT_CHANNELS
}

pub(crate) fn default_frequency_hz() -> f64 {
    DEFAULT_FREQUENCY_HZ
}

pub(crate) fn default_duration_secs() -> f64 {
    DEFAULT_DURATION_SECS
}

pub(crate) fn default_block_frames() -> usize {
    DEFAULT_BLOCK_FRAMES
}
