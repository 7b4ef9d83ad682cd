mod interleave_policy;
mod recording_info;
mod recording_session;
mod target;
mod write_outcome;

pub(crate) use target::{ActiveTarget, Recording};

pub use {
    interleave_policy::InterleavePolicy,
    recording_info::RecordingInfo,
    recording_session::RecordingSession,
    target::{SessionState, TargetKind},
    write_outcome::{SkipReason, WriteOutcome},
};
