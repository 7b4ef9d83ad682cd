use crate::{EncoderError, encoder::VideoEncoder};

use std::{convert::Infallible, panic::Location, path::Path};

use error_location::ErrorLocation;

/// Video encoder for builds without video recording support.
///
/// Every open fails, so its handle type is uninhabited and the remaining
/// operations can never be reached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoVideo;

impl VideoEncoder for NoVideo {
    type Handle = Infallible;
    type Error = EncoderError;

    #[track_caller]
    fn open(&mut self, path: &Path) -> Result<Self::Handle, Self::Error> {
        Err(EncoderError::Unsupported {
            what: format!("video recording to {:?}", path),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn add_audio_samples(
        &mut self,
        handle: &mut Self::Handle,
        _buffer: &[u8],
    ) -> Result<usize, Self::Error> {
        match *handle {}
    }

    fn add_video_frame(&mut self, handle: &mut Self::Handle) -> Result<usize, Self::Error> {
        match *handle {}
    }

    fn close(&mut self, handle: Self::Handle) -> Result<(), Self::Error> {
        match handle {}
    }
}
