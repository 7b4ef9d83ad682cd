mod audio_encoder;
mod no_video;
mod video_encoder;
mod wav;

pub use {
    audio_encoder::AudioEncoder,
    no_video::NoVideo,
    video_encoder::VideoEncoder,
    wav::{SampleWidth, WavEncoder, WavFormat, WavHandle},
};
