use std::path::Path;

/// Writer for video container files carrying interleaved audio.
///
/// Frame data is not passed in: the encoder pulls the current screen from
/// its own source when [`add_video_frame`](VideoEncoder::add_video_frame)
/// is called.
pub trait VideoEncoder {
    /// Open file state.
    type Handle;
    /// Error reported by every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the container at `path` and writes its header.
    fn open(&mut self, path: &Path) -> Result<Self::Handle, Self::Error>;

    /// Appends a block of PCM data to the audio stream, returning the
    /// number of bytes accepted. `Ok(0)` is treated as a rejection.
    fn add_audio_samples(
        &mut self,
        handle: &mut Self::Handle,
        buffer: &[u8],
    ) -> Result<usize, Self::Error>;

    /// Appends the current frame, returning the number of bytes written.
    /// `Ok(0)` is treated as a rejection.
    fn add_video_frame(&mut self, handle: &mut Self::Handle) -> Result<usize, Self::Error>;

    /// Finalizes the container, rewriting header and index data.
    fn close(&mut self, handle: Self::Handle) -> Result<(), Self::Error>;
}
