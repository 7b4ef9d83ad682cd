/// Why a write call did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The sample buffer was empty.
    EmptyBuffer,
    /// No file is open.
    NoFileOpen,
    /// A video frame was offered while recording a sound file.
    NotRecordingVideo,
}

/// Result of a write that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The encoder accepted the data.
    Written {
        /// Bytes reported by the encoder.
        bytes: usize,
    },
    /// Nothing was forwarded to an encoder.
    Skipped(SkipReason),
}

impl WriteOutcome {
    /// Bytes written, zero when skipped.
    pub fn bytes(&self) -> usize {
        match self {
            WriteOutcome::Written { bytes } => *bytes,
            WriteOutcome::Skipped(_) => 0,
        }
    }

    /// True if the encoder accepted data.
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }
}
