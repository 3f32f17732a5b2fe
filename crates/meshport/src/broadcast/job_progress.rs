//! Job progress broadcaster for real-time job status streaming.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Phase of job processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobPhase {
    Queued,
    Converting,
    PostProcessing,
    Completed,
    Failed,
}

impl std::fmt::Display for JobPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobPhase::Queued => write!(f, "Queued"),
            JobPhase::Converting => write!(f, "Converting"),
            JobPhase::PostProcessing => write!(f, "Post-processing"),
            JobPhase::Completed => write!(f, "Completed"),
            JobPhase::Failed => write!(f, "Failed"),
        }
    }
}

/// Status of a job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Processing,
    Completed,
    Failed,
}

/// Progress event for a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobProgressEvent {
    /// Unique job identifier.
    pub job_id: String,
    /// Original filename being converted.
    pub filename: String,
    /// Current phase of processing.
    pub phase: JobPhase,
    /// Overall job status.
    pub status: JobStatus,
    /// Human-readable message describing current activity.
    pub message: String,
    /// Timestamp of this event.
    pub timestamp: DateTime<Utc>,
    /// Output path (set on completion).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    /// Error message (set on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Source path of the file being converted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_path: Option<String>,
    /// MIME type of the source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

impl JobProgressEvent {
    /// Creates a new progress event.
    pub fn new(job_id: &str, filename: &str, phase: JobPhase, message: &str) -> Self {
        let status = match phase {
            JobPhase::Completed => JobStatus::Completed,
            JobPhase::Failed => JobStatus::Failed,
            _ => JobStatus::Processing,
        };

        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            phase,
            status,
            message: message.to_string(),
            timestamp: Utc::now(),
            output_path: None,
            error: None,
            source_path: None,
            mime_type: None,
        }
    }

    /// Creates a completion event.
    pub fn completed(job_id: &str, filename: &str, output_path: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            phase: JobPhase::Completed,
            status: JobStatus::Completed,
            message: "Conversion completed successfully".to_string(),
            timestamp: Utc::now(),
            output_path: Some(output_path.to_string()),
            error: None,
            source_path: None,
            mime_type: None,
        }
    }

    /// Creates a failure event.
    pub fn failed(job_id: &str, filename: &str, error: &str) -> Self {
        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            phase: JobPhase::Failed,
            status: JobStatus::Failed,
            message: "Conversion failed".to_string(),
            timestamp: Utc::now(),
            output_path: None,
            error: Some(error.to_string()),
            source_path: None,
            mime_type: None,
        }
    }
}

/// Broadcasts job progress events for streaming.
#[derive(Clone)]
pub struct JobProgressBroadcaster {
    sender: Arc<broadcast::Sender<JobProgressEvent>>,
}

impl JobProgressBroadcaster {
    /// Creates a new job progress broadcaster with the specified channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Sends a progress event to all subscribers.
    pub fn send(&self, event: JobProgressEvent) {
        // Ignore errors - no active receivers is fine
        let _ = self.sender.send(event);
    }

    /// Creates a new subscriber for progress events.
    pub fn subscribe(&self) -> broadcast::Receiver<JobProgressEvent> {
        self.sender.subscribe()
    }

    /// Gets the inner sender for creating trackers.
    pub fn sender(&self) -> Arc<broadcast::Sender<JobProgressEvent>> {
        Arc::clone(&self.sender)
    }
}

impl Default for JobProgressBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Tracks progress for a single job.
pub struct JobProgressTracker {
    job_id: String,
    filename: String,
    source_path: Option<String>,
    mime_type: Option<String>,
    sender: Arc<broadcast::Sender<JobProgressEvent>>,
}

impl JobProgressTracker {
    /// Creates a new job progress tracker.
    pub fn new(
        job_id: &str,
        filename: &str,
        sender: Arc<broadcast::Sender<JobProgressEvent>>,
    ) -> Self {
        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            source_path: None,
            mime_type: None,
            sender,
        }
    }

    /// Creates a new job progress tracker with source information.
    pub fn with_source(
        job_id: &str,
        filename: &str,
        source_path: &str,
        mime_type: Option<&str>,
        sender: Arc<broadcast::Sender<JobProgressEvent>>,
    ) -> Self {
        Self {
            job_id: job_id.to_string(),
            filename: filename.to_string(),
            source_path: Some(source_path.to_string()),
            mime_type: mime_type.map(|s| s.to_string()),
            sender,
        }
    }

    /// Adds source information to events.
    fn add_source_info(&self, mut event: JobProgressEvent) -> JobProgressEvent {
        event.source_path = self.source_path.clone();
        event.mime_type = self.mime_type.clone();
        event
    }

    /// Updates the current phase with a message.
    pub fn update_phase(&self, phase: JobPhase, message: &str) {
        let event = JobProgressEvent::new(&self.job_id, &self.filename, phase, message);
        let event = self.add_source_info(event);
        let _ = self.sender.send(event);
    }

    /// Marks the job as completed with its output path.
    pub fn completed(&self, output_path: &str) {
        let event = JobProgressEvent::completed(&self.job_id, &self.filename, output_path);
        let event = self.add_source_info(event);
        let _ = self.sender.send(event);
    }

    /// Marks the job as failed with an error message.
    pub fn failed(&self, error: &str) {
        let event = JobProgressEvent::failed(&self.job_id, &self.filename, error);
        let event = self.add_source_info(event);
        let _ = self.sender.send(event);
    }
}
