use serde::{Deserialize, Serialize};

/// How a video session treats two frames with no audio block between them.
///
/// Callers are expected to write one audio block per video frame, in
/// either order. `Lenient` logs a warning and writes the frame anyway;
/// `Strict` rejects the frame with
/// [`MultimediaError::InterleaveViolation`](crate::MultimediaError::InterleaveViolation)
/// and leaves the session open. The first frame after opening is always
/// accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterleavePolicy {
    /// Warn and continue.
    #[default]
    Lenient,
    /// Reject the frame.
    Strict,
}
