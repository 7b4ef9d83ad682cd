use crate::TargetKind;

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use uuid::Uuid;

/// Bookkeeping for the file currently being recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingInfo {
    /// Unique ID for log correlation.
    pub session_id: Uuid,
    /// Kind of file being written.
    pub kind: TargetKind,
    /// Path the file was opened at.
    pub path: PathBuf,
    /// When the file was opened.
    pub started_at: Instant,
    /// Bytes accepted by the encoder so far (audio and video).
    pub bytes_written: u64,
    /// Number of audio blocks accepted.
    pub audio_blocks: u64,
    /// Number of video frames accepted.
    pub frames_written: u64,
}

impl RecordingInfo {
    pub(crate) fn new(kind: TargetKind, path: &Path) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            kind,
            path: path.to_path_buf(),
            started_at: Instant::now(),
            bytes_written: 0,
            audio_blocks: 0,
            frames_written: 0,
        }
    }

    pub(crate) fn record_audio(&mut self, bytes: usize) {
        self.bytes_written += bytes as u64;
        self.audio_blocks += 1;
    }

    pub(crate) fn record_frame(&mut self, bytes: usize) {
        self.bytes_written += bytes as u64;
        self.frames_written += 1;
    }
}
