use std::sync::Arc;

use tokio::sync::broadcast;

use crate::broadcast::job_progress::{JobPhase, JobProgressEvent, JobProgressTracker};

/// Events emitted by the pipeline while a job is processed.
pub enum ProgressEvent {
    Phase { phase: JobPhase, message: String },
    Completed { output_path: String },
    Failed { error: String },
}

pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent);
}

/// No-op reporter for unit tests.
pub struct NoopProgress;

impl ProgressReporter for NoopProgress {
    fn report(&self, _event: ProgressEvent) {}
}

/// Bridges pipeline events to the job progress broadcast channel.
pub struct BroadcastProgress {
    tracker: JobProgressTracker,
}

impl BroadcastProgress {
    pub fn new(
        job_id: &str,
        filename: &str,
        source_path: &str,
        mime_type: Option<&str>,
        sender: Arc<broadcast::Sender<JobProgressEvent>>,
    ) -> Self {
        let tracker = JobProgressTracker::with_source(job_id, filename, source_path, mime_type, sender);
        Self { tracker }
    }
}

impl ProgressReporter for BroadcastProgress {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::Phase { phase, message } => {
                self.tracker.update_phase(phase, &message);
            }
            ProgressEvent::Completed { output_path } => {
                self.tracker.completed(&output_path);
            }
            ProgressEvent::Failed { error } => {
                self.tracker.failed(&error);
            }
        }
    }
}
