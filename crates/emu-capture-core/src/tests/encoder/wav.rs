use crate::{
    AudioEncoder, EncoderError, MultimediaError, NoVideo, RecordingSession, SampleWidth,
    WavEncoder, WavFormat,
};

use hound::WavReader;
use tempfile::tempdir;

const STEREO_S16: WavFormat = WavFormat {
    sample_rate: 48_000,
    channels: 2,
    sample_width: SampleWidth::S16Le,
};

/// WHAT: Unsigned 8-bit blocks are stored as 8-bit PCM
/// WHY: The sound generator emits unsigned bytes centered on 0x80
#[test]
fn given_u8_mono_format_when_writing_block_then_samples_round_trip() {
    // Given: A mono 8-bit encoder and a temp file
    let dir = tempdir().unwrap();
    let path = dir.path().join("tone.wav");
    let mut encoder = WavEncoder::new(WavFormat::default());

    // When: Writing silence, full scale and zero, then closing
    let mut handle = encoder.open(&path).unwrap();
    let written = encoder
        .write_samples(&mut handle, &[0x80, 0xFF, 0x00])
        .unwrap();
    encoder.close(handle).unwrap();

    // Then: The header matches and samples decode around zero
    assert_eq!(written, 3);
    let mut reader = WavReader::open(&path).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.sample_rate, 44_100);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 8);
    let samples: Vec<i8> = reader.samples::<i8>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![0, 127, -128]);
}

/// WHAT: 16-bit stereo blocks are decoded little-endian
/// WHY: Byte order must survive the trip into the file
#[test]
fn given_s16_stereo_format_when_writing_frames_then_samples_little_endian() {
    // Given: A stereo 16-bit encoder
    let dir = tempdir().unwrap();
    let path = dir.path().join("stereo.wav");
    let mut encoder = WavEncoder::new(STEREO_S16);

    // When: Writing two frames
    let block = [0x01, 0x00, 0xFF, 0xFF, 0x00, 0x80, 0xFF, 0x7F];
    let mut handle = encoder.open(&path).unwrap();
    encoder.write_samples(&mut handle, &block).unwrap();
    encoder.close(handle).unwrap();

    // Then: Four samples in two frames
    let mut reader = WavReader::open(&path).unwrap();
    assert_eq!(reader.duration(), 2);
    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples, vec![1, -1, i16::MIN, i16::MAX]);
}

/// WHAT: Partial frames are rejected
/// WHY: A WAV data chunk must hold whole frames
#[test]
fn given_s16_stereo_format_when_writing_partial_frame_then_invalid_buffer() {
    // Given: A stereo 16-bit encoder with an open file
    let dir = tempdir().unwrap();
    let mut encoder = WavEncoder::new(STEREO_S16);
    let mut handle = encoder.open(&dir.path().join("partial.wav")).unwrap();

    // When: Writing six bytes (one and a half frames)
    let result = encoder.write_samples(&mut handle, &[0u8; 6]);

    // Then: InvalidBuffer
    assert!(matches!(result, Err(EncoderError::InvalidBuffer { .. })));
    assert!(encoder.close(handle).is_ok());
}

/// WHAT: Closing a session finalizes the WAV length fields
/// WHY: Readers rely on the header to know how much data follows
#[test]
fn given_session_over_wav_when_recording_blocks_then_header_lengths_finalized() {
    // Given: A session writing 16-bit stereo WAV
    let dir = tempdir().unwrap();
    let path = dir.path().join("capture000.wav");
    let mut session = RecordingSession::new(WavEncoder::new(STEREO_S16), NoVideo);

    // When: Recording ten blocks of 256 frames and closing
    session.open_sound_file(&path).unwrap();
    for _ in 0..10 {
        let outcome = session.write_audio(&[0u8; 256 * 4]).unwrap();
        assert_eq!(outcome.bytes(), 1024);
    }
    session.close_file().unwrap();

    // Then: The file reports exactly the frames written
    let reader = WavReader::open(&path).unwrap();
    assert_eq!(reader.duration(), 2560);
    assert_eq!(reader.len(), 5120);
}

/// WHAT: A malformed block ends the session but leaves a readable file
/// WHY: Forced close still finalizes what was written before the failure
#[test]
fn given_session_over_wav_when_block_malformed_then_closed_and_file_readable() {
    // Given: A session with one good block written
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.wav");
    let mut session = RecordingSession::new(WavEncoder::new(STEREO_S16), NoVideo);
    session.open_sound_file(&path).unwrap();
    session.write_audio(&[0u8; 400]).unwrap();

    // When: Writing a block that is not a whole number of frames
    let result = session.write_audio(&[0u8; 3]);

    // Then: WriteFailed, finalized, session idle, file holds the first block
    assert!(matches!(
        result,
        Err(MultimediaError::WriteFailed {
            finalized: true,
            ..
        })
    ));
    assert!(!session.is_file_open());
    let reader = WavReader::open(&path).unwrap();
    assert_eq!(reader.duration(), 100);
}

/// WHAT: Opening inside a missing directory fails cleanly
/// WHY: The encoder surfaces filesystem errors as open failures
#[test]
fn given_missing_directory_when_opening_sound_file_then_open_failed_and_idle() {
    // Given: A path under a directory that does not exist
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("capture.wav");
    let mut session = RecordingSession::new(WavEncoder::new(WavFormat::default()), NoVideo);

    // When: Opening the sound file
    let result = session.open_sound_file(&path);

    // Then: OpenFailed, nothing open
    assert!(matches!(result, Err(MultimediaError::OpenFailed { .. })));
    assert!(!session.is_file_open());
}

/// WHAT: Dropping a session mid-recording leaves a valid WAV
/// WHY: Drop finalizes headers even if the caller forgot to close
#[test]
fn given_open_wav_session_when_dropped_then_file_finalized() {
    // Given: A session with data written
    let dir = tempdir().unwrap();
    let path = dir.path().join("dropped.wav");
    let mut session = RecordingSession::new(WavEncoder::new(WavFormat::default()), NoVideo);
    session.open_sound_file(&path).unwrap();
    session.write_audio(&[0x80; 735]).unwrap();

    // When: Dropping without closing
    drop(session);

    // Then: The header reports the written samples
    let reader = WavReader::open(&path).unwrap();
    assert_eq!(reader.duration(), 735);
}
