use crate::RecordingInfo;

use std::fmt;

/// Kind of file a session writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Sound-only file.
    Sound,
    /// Video container with interleaved audio.
    Video,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Sound => f.write_str("sound"),
            TargetKind::Video => f.write_str("video"),
        }
    }
}

/// Observable state of a [`RecordingSession`](crate::RecordingSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No file open.
    Idle,
    /// Writing a sound file.
    RecordingAudio,
    /// Writing a video file.
    RecordingVideo,
}

/// An open encoder handle together with its bookkeeping.
pub(crate) struct Recording<H> {
    pub(crate) handle: H,
    pub(crate) info: RecordingInfo,
}

/// The single output a session writes to.
pub(crate) enum ActiveTarget<A, V> {
    Idle,
    Audio(Recording<A>),
    Video {
        recording: Recording<V>,
        /// Set once an audio block lands in the container, cleared by each frame.
        audio_since_frame: bool,
    },
}

impl<A, V> ActiveTarget<A, V> {
    pub(crate) fn state(&self) -> SessionState {
        match self {
            ActiveTarget::Idle => SessionState::Idle,
            ActiveTarget::Audio(_) => SessionState::RecordingAudio,
            ActiveTarget::Video { .. } => SessionState::RecordingVideo,
        }
    }

    pub(crate) fn info(&self) -> Option<&RecordingInfo> {
        match self {
            ActiveTarget::Idle => None,
            ActiveTarget::Audio(recording) => Some(&recording.info),
            ActiveTarget::Video { recording, .. } => Some(&recording.info),
        }
    }
}
