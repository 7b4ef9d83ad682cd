//! Emu-capture Core Library
//!
//! Recording session layer for emulator audio and video output. A
//! [`RecordingSession`] owns at most one open file, a sound file or a video
//! file, and routes sample blocks and frames to the matching encoder.
//!
//! # Example
//!
//! ```no_run
//! use emu_capture_core::{
//!     CoreResult, NoVideo, RecordingSession, SampleWidth, WavEncoder, WavFormat,
//! };
//!
//! fn main() -> CoreResult<()> {
//!     let format = WavFormat {
//!         sample_rate: 44_100,
//!         channels: 2,
//!         sample_width: SampleWidth::S16Le,
//!     };
//!     let mut session = RecordingSession::new(WavEncoder::new(format), NoVideo);
//!
//!     session.open_sound_file("capture000.wav")?;
//!     for _ in 0..50 {
//!         session.write_audio(&[0u8; 3528])?;
//!     }
//!     session.close_file()?;
//!
//!     Ok(())
//! }
//! ```

mod encoder;
mod error;
mod session;

pub use {
    encoder::{
        AudioEncoder, NoVideo, SampleWidth, VideoEncoder, WavEncoder, WavFormat, WavHandle,
    },
    error::{EncoderError, EncoderSource, MultimediaError, Result as CoreResult},
    session::{
        InterleavePolicy, RecordingInfo, RecordingSession, SessionState, SkipReason, TargetKind,
        WriteOutcome,
    },
};

#[cfg(test)]
mod tests;
