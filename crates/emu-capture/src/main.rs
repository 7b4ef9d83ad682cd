//! Emu-Capture: records emulator sound output to numbered WAV files.
//!
//! Usage: `emu-capture [OUTPUT.wav]`. Without an argument the next free
//! `<prefix>NNN.wav` in the configured output directory is used.

mod config;
mod error;
mod recorder;
mod signal;

pub(crate) use {
    error::{AppError, Result as AppResult},
    recorder::Recorder,
    signal::SquareWave,
};

use crate::config::Config;

use std::path::PathBuf;

use tracing::{error, info};

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("emu_capture=debug,emu_capture_core=debug")
        .init();

    if let Err(e) = run() {
        error!("Recording failed: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => config.next_output_path()?,
    };

    let mut recorder = Recorder::new(&config);
    let summary = recorder.record(&path)?;

    info!(
        path = ?summary.path,
        bytes_written = summary.bytes_written,
        "Recording saved"
    );

    Ok(())
}
