//! Broadcasting modules for real-time event streaming.
//!
//! This module contains broadcasters for the event types consumed by the
//! desktop shell (or any other integration).

pub mod batch_progress;
pub mod job_progress;
pub mod log_broadcaster;

pub use batch_progress::{BatchProgressBroadcaster, BatchProgressEvent};
pub use job_progress::{
    JobPhase, JobProgressBroadcaster, JobProgressEvent, JobProgressTracker, JobStatus,
};
pub use log_broadcaster::{BroadcastingLogWriter, LogBroadcaster, LogEvent};
