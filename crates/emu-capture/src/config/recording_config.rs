use crate::config::default_file_prefix;

use std::path::PathBuf;

use emu_capture_core::InterleavePolicy;
use serde::{Deserialize, Serialize};

/// Where recordings go and how the session is set up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Directory new recordings are numbered into.
    pub output_dir: PathBuf,

    /// File name prefix, followed by a three-digit index.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Handling of video frames written without audio in between.
    #[serde(default)]
    pub interleave: InterleavePolicy,
}
