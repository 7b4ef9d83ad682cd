use crate::{AppResult, SquareWave, config::Config};

use std::path::{Path, PathBuf};

use emu_capture_core::{NoVideo, RecordingSession, WavEncoder, WavFormat, WriteOutcome};
use tracing::{info, instrument, warn};

/// What a finished recording wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingSummary {
    /// File the recording was written to.
    pub path: PathBuf,
    /// PCM bytes accepted by the encoder.
    pub bytes_written: u64,
    /// Number of blocks written.
    pub blocks: u64,
}

/// Drives a sound recording the way the emulator loop would: one block of
/// freshly generated samples per write.
pub struct Recorder {
    session: RecordingSession<WavEncoder, NoVideo>,
    signal: SquareWave,
    format: WavFormat,
    block_frames: usize,
    total_frames: u64,
}

impl Recorder {
    /// Builds a recorder from validated configuration.
    pub fn new(config: &Config) -> Self {
        let format = config.sound.format();
        let session = RecordingSession::new(WavEncoder::new(format), NoVideo)
            .with_interleave_policy(config.recording.interleave);
        let total_frames =
            (config.signal.duration_secs * f64::from(config.sound.sample_rate)).round() as u64;

        Self {
            session,
            signal: SquareWave::new(format, config.signal.frequency_hz),
            format,
            block_frames: config.signal.block_frames,
            total_frames,
        }
    }

    /// Records the configured duration into `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened, a block is rejected (the
    /// file is already closed then), or the file cannot be finalized.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn record(&mut self, path: &Path) -> AppResult<RecordingSummary> {
        self.session.open_sound_file(path)?;

        let block_align = self.format.block_align();
        let mut buffer = vec![0u8; self.block_frames * block_align];
        let mut remaining = self.total_frames;
        let mut summary = RecordingSummary {
            path: path.to_path_buf(),
            bytes_written: 0,
            blocks: 0,
        };

        while remaining > 0 {
            let frames = remaining.min(self.block_frames as u64) as usize;
            let block = &mut buffer[..frames * block_align];
            self.signal.fill(block);

            match self.session.write_audio(block)? {
                WriteOutcome::Written { bytes } => {
                    summary.bytes_written += bytes as u64;
                    summary.blocks += 1;
                }
                WriteOutcome::Skipped(reason) => {
                    warn!(reason = ?reason, "Sound block skipped, stopping");
                    break;
                }
            }

            remaining -= frames as u64;
        }

        self.session.close_file()?;

        info!(
            path = ?summary.path,
            bytes_written = summary.bytes_written,
            blocks = summary.blocks,
            "Recording finished"
        );

        Ok(summary)
    }
}
