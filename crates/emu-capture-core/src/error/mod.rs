use crate::session::TargetKind;

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Boxed error produced by an encoder collaborator.
pub type EncoderSource = Box<dyn std::error::Error + Send + Sync>;

/// Recording session errors with source location tracking.
#[derive(Error, Debug)]
pub enum MultimediaError {
    /// Encoder could not create or initialize the target file.
    ///
    /// The session is left idle.
    #[error("Failed to open {kind} file {path:?}: {source} {location}")]
    OpenFailed {
        /// Kind of file that was being opened.
        kind: TargetKind,
        /// Path handed to the encoder.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: EncoderSource,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Encoder rejected a sample block or video frame.
    ///
    /// The session has already been closed when this is returned.
    #[error("{kind} write rejected, session closed (finalized: {finalized}): {source} {location}")]
    WriteFailed {
        /// Kind of file that rejected the write.
        kind: TargetKind,
        /// Whether the forced close managed to finalize the file.
        finalized: bool,
        /// Underlying encoder error.
        #[source]
        source: EncoderSource,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Finalizing the file failed (e.g. the header could not be rewritten).
    ///
    /// The session is idle regardless.
    #[error("Failed to finalize {kind} file {path:?}: {source} {location}")]
    CloseFailed {
        /// Kind of file that was being closed.
        kind: TargetKind,
        /// Path of the file that was being closed.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: EncoderSource,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A video frame was written with no audio block since the previous frame.
    #[error("Video frame {frame} written before any audio since the previous frame {location}")]
    InterleaveViolation {
        /// Zero-based index of the rejected frame.
        frame: u64,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Errors raised by the encoders shipped with this crate.
#[derive(Error, Debug)]
pub enum EncoderError {
    /// WAV writer failed.
    #[error("WAV error: {source} {location}")]
    Wav {
        /// The underlying hound error.
        #[source]
        source: hound::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Sample buffer does not match the configured format.
    #[error("Invalid sample buffer: {reason} {location}")]
    InvalidBuffer {
        /// Description of the mismatch.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Requested media kind is not supported by this build.
    #[error("Unsupported: {what} {location}")]
    Unsupported {
        /// What was requested.
        what: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Encoder refused the operation.
    #[error("Rejected: {reason} {location}")]
    Rejected {
        /// Why the encoder refused.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`MultimediaError`].
pub type Result<T> = std::result::Result<T, MultimediaError>;
