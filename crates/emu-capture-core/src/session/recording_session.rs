use crate::{
    CoreResult, MultimediaError, RecordingInfo,
    encoder::{AudioEncoder, VideoEncoder},
    error::EncoderSource,
    session::{
        ActiveTarget, InterleavePolicy, Recording, SessionState, SkipReason, TargetKind,
        WriteOutcome,
    },
};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{debug, error, info, instrument, trace, warn};

/// Gates all recording through a single open file.
///
/// At most one file is open at a time, either a sound file written by `A`
/// or a video file written by `V`. Opening always closes whatever was open
/// first. A rejected write closes the file before the error is returned,
/// so a failed session never lingers half-open.
///
/// # Thread Safety
///
/// RecordingSession is NOT internally synchronized. Every operation takes
/// `&mut self`; to drive it from several threads, wrap the whole session in
/// a mutex so each open, close or write runs as one unit.
///
/// # Example
///
/// ```no_run
/// use emu_capture_core::{CoreResult, NoVideo, RecordingSession, WavEncoder, WavFormat};
///
/// fn main() -> CoreResult<()> {
///     let mut session = RecordingSession::new(WavEncoder::new(WavFormat::default()), NoVideo);
///
///     session.open_sound_file("capture000.wav")?;
///     session.write_audio(&[0x80; 735])?;
///     session.close_file()?;
///     Ok(())
/// }
/// ```
pub struct RecordingSession<A: AudioEncoder, V: VideoEncoder> {
    audio: A,
    video: V,
    target: ActiveTarget<A::Handle, V::Handle>,
    interleave: InterleavePolicy,
}

impl<A: AudioEncoder, V: VideoEncoder> RecordingSession<A, V> {
    /// Creates an idle session over the given encoders.
    pub fn new(audio: A, video: V) -> Self {
        Self {
            audio,
            video,
            target: ActiveTarget::Idle,
            interleave: InterleavePolicy::default(),
        }
    }

    /// Sets how back-to-back video frames without audio are handled.
    pub fn with_interleave_policy(mut self, policy: InterleavePolicy) -> Self {
        self.interleave = policy;
        self
    }

    /// Returns true if a sound or video file is open.
    pub fn is_file_open(&self) -> bool {
        !matches!(self.target, ActiveTarget::Idle)
    }

    /// Current state of the session.
    pub fn state(&self) -> SessionState {
        self.target.state()
    }

    /// Details of the open file, if any.
    pub fn recording(&self) -> Option<&RecordingInfo> {
        self.target.info()
    }

    /// Interleave policy in effect.
    pub fn interleave_policy(&self) -> InterleavePolicy {
        self.interleave
    }

    /// Finalizes and closes the open file.
    ///
    /// The session is idle afterwards even if finalizing failed. Closing
    /// with nothing open does nothing and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`MultimediaError::CloseFailed`] if the encoder could not
    /// finalize the file.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn close_file(&mut self) -> CoreResult<()> {
        let (info, result) = match std::mem::replace(&mut self.target, ActiveTarget::Idle) {
            ActiveTarget::Idle => {
                debug!("Close requested with no file open");
                return Ok(());
            }
            ActiveTarget::Audio(recording) => (
                recording.info,
                self.audio.close(recording.handle).map_err(boxed),
            ),
            ActiveTarget::Video { recording, .. } => (
                recording.info,
                self.video.close(recording.handle).map_err(boxed),
            ),
        };

        match result {
            Ok(()) => {
                info!(
                    session_id = %info.session_id,
                    kind = %info.kind,
                    path = ?info.path,
                    bytes_written = info.bytes_written,
                    audio_blocks = info.audio_blocks,
                    frames_written = info.frames_written,
                    duration_ms = info.started_at.elapsed().as_millis(),
                    "Recording closed"
                );
                Ok(())
            }
            Err(source) => {
                error!(
                    session_id = %info.session_id,
                    kind = %info.kind,
                    path = ?info.path,
                    error = %source,
                    "Failed to finalize recording"
                );
                Err(MultimediaError::CloseFailed {
                    kind: info.kind,
                    path: info.path,
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Starts a new sound file at `path`, closing any open file first.
    ///
    /// # Errors
    ///
    /// Returns [`MultimediaError::OpenFailed`] if the encoder could not
    /// create the file. The session is idle in that case.
    #[track_caller]
    #[instrument(skip(self, path))]
    pub fn open_sound_file<P: AsRef<Path>>(&mut self, path: P) -> CoreResult<()> {
        let path = path.as_ref();
        self.supersede();

        let handle = self
            .audio
            .open(path)
            .map_err(|e| MultimediaError::OpenFailed {
                kind: TargetKind::Sound,
                path: path.to_path_buf(),
                source: Box::new(e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let info = RecordingInfo::new(TargetKind::Sound, path);
        info!(session_id = %info.session_id, path = ?path, "Sound recording started");

        self.target = ActiveTarget::Audio(Recording { handle, info });

        Ok(())
    }

    /// Starts a new video file at `path`, closing any open file first.
    ///
    /// # Errors
    ///
    /// Returns [`MultimediaError::OpenFailed`] if the encoder could not
    /// create the file. The session is idle in that case.
    #[track_caller]
    #[instrument(skip(self, path))]
    pub fn open_video_file<P: AsRef<Path>>(&mut self, path: P) -> CoreResult<()> {
        let path = path.as_ref();
        self.supersede();

        let handle = self
            .video
            .open(path)
            .map_err(|e| MultimediaError::OpenFailed {
                kind: TargetKind::Video,
                path: path.to_path_buf(),
                source: Box::new(e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let info = RecordingInfo::new(TargetKind::Video, path);
        info!(session_id = %info.session_id, path = ?path, "Video recording started");

        self.target = ActiveTarget::Video {
            recording: Recording { handle, info },
            audio_since_frame: false,
        };

        Ok(())
    }

    /// Writes a block of PCM data to the open file.
    ///
    /// Sound files receive the block directly; video files receive it as
    /// the container's audio stream. An empty buffer, or no open file, is
    /// skipped without touching an encoder.
    ///
    /// # Errors
    ///
    /// Returns [`MultimediaError::WriteFailed`] if the encoder rejected the
    /// block. The file has been closed by the time this is returned.
    #[track_caller]
    #[instrument(level = "trace", skip(self, buffer), fields(len = buffer.len()))]
    pub fn write_audio(&mut self, buffer: &[u8]) -> CoreResult<WriteOutcome> {
        if buffer.is_empty() {
            return Ok(WriteOutcome::Skipped(SkipReason::EmptyBuffer));
        }

        let (kind, result) = match &mut self.target {
            ActiveTarget::Idle => return Ok(WriteOutcome::Skipped(SkipReason::NoFileOpen)),
            ActiveTarget::Audio(recording) => {
                let result = accepted(self.audio.write_samples(&mut recording.handle, buffer));
                if let Ok(bytes) = &result {
                    recording.info.record_audio(*bytes);
                }
                (TargetKind::Sound, result)
            }
            ActiveTarget::Video {
                recording,
                audio_since_frame,
            } => {
                let result =
                    accepted(self.video.add_audio_samples(&mut recording.handle, buffer));
                if let Ok(bytes) = &result {
                    recording.info.record_audio(*bytes);
                    *audio_since_frame = true;
                }
                (TargetKind::Video, result)
            }
        };

        match result {
            Ok(bytes) => {
                trace!(kind = %kind, bytes = bytes, "Audio block written");
                Ok(WriteOutcome::Written { bytes })
            }
            Err(source) => Err(self.force_close(kind, source)),
        }
    }

    /// Writes the current screen as the next frame of the open video file.
    ///
    /// Skipped unless a video file is open. Callers are expected to write
    /// an audio block between frames; see [`InterleavePolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`MultimediaError::WriteFailed`] if the encoder rejected the
    /// frame (the file has been closed), or
    /// [`MultimediaError::InterleaveViolation`] under
    /// [`InterleavePolicy::Strict`] (the file stays open).
    #[track_caller]
    #[instrument(level = "trace", skip(self))]
    pub fn write_video(&mut self) -> CoreResult<WriteOutcome> {
        let (recording, audio_since_frame) = match &mut self.target {
            ActiveTarget::Video {
                recording,
                audio_since_frame,
            } => (recording, audio_since_frame),
            ActiveTarget::Idle => return Ok(WriteOutcome::Skipped(SkipReason::NoFileOpen)),
            ActiveTarget::Audio(_) => {
                return Ok(WriteOutcome::Skipped(SkipReason::NotRecordingVideo));
            }
        };

        let frame = recording.info.frames_written;
        if frame > 0 && !*audio_since_frame {
            match self.interleave {
                InterleavePolicy::Lenient => warn!(
                    session_id = %recording.info.session_id,
                    frame = frame,
                    "Video frame written without audio since previous frame"
                ),
                InterleavePolicy::Strict => {
                    return Err(MultimediaError::InterleaveViolation {
                        frame,
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            }
        }

        match accepted(self.video.add_video_frame(&mut recording.handle)) {
            Ok(bytes) => {
                recording.info.record_frame(bytes);
                *audio_since_frame = false;
                trace!(frame = frame, bytes = bytes, "Video frame written");
                Ok(WriteOutcome::Written { bytes })
            }
            Err(source) => Err(self.force_close(TargetKind::Video, source)),
        }
    }

    /// Closes ahead of a new open. A failed finalize is logged, not returned.
    #[track_caller]
    fn supersede(&mut self) {
        if let Some(info) = self.target.info() {
            debug!(session_id = %info.session_id, "Closing recording superseded by new open");
        }

        if let Err(e) = self.close_file() {
            warn!(error = %e, "Superseded recording did not finalize cleanly");
        }
    }

    #[track_caller]
    fn force_close(&mut self, kind: TargetKind, source: EncoderSource) -> MultimediaError {
        if let Some(info) = self.target.info() {
            error!(
                session_id = %info.session_id,
                kind = %kind,
                error = %source,
                "Write rejected, closing recording"
            );
        }

        let finalized = self.close_file().is_ok();

        MultimediaError::WriteFailed {
            kind,
            finalized,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl<A: AudioEncoder, V: VideoEncoder> Drop for RecordingSession<A, V> {
    fn drop(&mut self) {
        let Some(info) = self.target.info() else {
            return;
        };

        warn!(
            session_id = %info.session_id,
            path = ?info.path,
            "Recording session dropped with file open, finalizing"
        );

        if let Err(e) = self.close_file() {
            error!(error = %e, "Failed to finalize recording on drop");
        }
    }
}

fn boxed<E: std::error::Error + Send + Sync + 'static>(e: E) -> EncoderSource {
    Box::new(e)
}

/// Treats a zero-byte write as a rejection.
fn accepted<E: std::error::Error + Send + Sync + 'static>(
    result: Result<usize, E>,
) -> Result<usize, EncoderSource> {
    match result {
        Ok(0) => Err("encoder accepted zero bytes".into()),
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(Box::new(e)),
    }
}
