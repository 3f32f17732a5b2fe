//! Batch progress broadcaster, the source for the UI progress bar.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::worker::batch::{BatchProgressSnapshot, BatchSummary};

/// Progress of the running batch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgressEvent {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
    /// File currently being converted, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_file: Option<String>,
    /// True on the final event of a batch.
    pub finished: bool,
    pub timestamp: DateTime<Utc>,
}

impl BatchProgressEvent {
    pub fn running(snapshot: BatchProgressSnapshot, current_file: Option<String>) -> Self {
        Self {
            total: snapshot.total,
            completed: snapshot.completed,
            failed: snapshot.failed,
            current_file,
            finished: false,
            timestamp: Utc::now(),
        }
    }

    pub fn finished(summary: BatchSummary) -> Self {
        Self {
            total: summary.total,
            completed: summary.succeeded + summary.failed,
            failed: summary.failed,
            current_file: None,
            finished: true,
            timestamp: Utc::now(),
        }
    }
}

/// Broadcasts batch progress events for streaming.
#[derive(Clone)]
pub struct BatchProgressBroadcaster {
    sender: Arc<broadcast::Sender<BatchProgressEvent>>,
}

impl BatchProgressBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn send(&self, event: BatchProgressEvent) {
        // Ignore errors - no active receivers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BatchProgressEvent> {
        self.sender.subscribe()
    }

    pub fn sender(&self) -> Arc<broadcast::Sender<BatchProgressEvent>> {
        Arc::clone(&self.sender)
    }
}

impl Default for BatchProgressBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}
