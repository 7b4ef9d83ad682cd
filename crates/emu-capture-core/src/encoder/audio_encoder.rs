use std::path::Path;

/// Writer for sound-only recording files.
///
/// Handles are owned by the [`RecordingSession`](crate::RecordingSession)
/// once opened. `close` takes the handle by value so a finalized file can
/// never be written again.
pub trait AudioEncoder {
    /// Open file state.
    type Handle;
    /// Error reported by every operation.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates the file at `path` and writes its header.
    fn open(&mut self, path: &Path) -> Result<Self::Handle, Self::Error>;

    /// Appends a block of PCM data, returning the number of bytes accepted.
    ///
    /// `Ok(0)` is treated as a rejection by the session.
    fn write_samples(&mut self, handle: &mut Self::Handle, buffer: &[u8])
    -> Result<usize, Self::Error>;

    /// Finalizes the file, updating any length fields in its header.
    fn close(&mut self, handle: Self::Handle) -> Result<(), Self::Error>;
}
