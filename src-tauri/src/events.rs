//! Event bridge between the meshport library and the Tauri frontend.

use std::sync::Arc;

use log::{debug, info, warn};
use meshport::broadcast::LogEvent;
use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};
use tokio::sync::RwLock;

use crate::state::TauriAppState;

/// Event names for Tauri events.
pub mod event_names {
    pub const LOG: &str = "meshport://log";
    pub const JOB_PROGRESS: &str = "meshport://job-progress";
    pub const BATCH_PROGRESS: &str = "meshport://batch-progress";
    pub const BATCH_FINISHED: &str = "meshport://batch-finished";
}

/// Log event payload for the frontend (serializable wrapper).
#[derive(Debug, Clone, Serialize)]
pub struct LogEventPayload {
    pub level: String,
    pub target: String,
    pub message: String,
    pub timestamp: String,
}

impl From<LogEvent> for LogEventPayload {
    fn from(event: LogEvent) -> Self {
        Self {
            level: event.level,
            target: event.target,
            message: event.message,
            timestamp: event.timestamp.to_rfc3339(),
        }
    }
}

/// Starts the event bridge that listens to meshport events and emits Tauri
/// events.
pub async fn start_event_bridge(app_handle: AppHandle) {
    info!("Starting event bridge");

    let state: &Arc<RwLock<TauriAppState>> =
        app_handle.state::<Arc<RwLock<TauriAppState>>>().inner();

    // Clone what we need for the async tasks
    let (log_broadcaster, job_broadcaster, batch_broadcaster) = {
        let state = state.read().await;
        (
            state.log_broadcaster.clone(),
            state.job_broadcaster.clone(),
            state.batch_broadcaster.clone(),
        )
    };

    // Spawn log event listener
    let app_clone = app_handle.clone();
    let mut log_rx = log_broadcaster.subscribe();
    tauri::async_runtime::spawn(async move {
        loop {
            match log_rx.recv().await {
                Ok(log_entry) => {
                    let payload = LogEventPayload::from(log_entry);
                    if let Err(e) = app_clone.emit(event_names::LOG, &payload) {
                        debug!("Failed to emit log event: {}", e);
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                    warn!("Log event bridge lagged, missed {} events", n);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    info!("Log broadcaster closed, stopping log event bridge");
                    break;
                }
            }
        }
    });

    // Spawn job progress event listener
    let app_clone = app_handle.clone();
    let mut job_rx = job_broadcaster.subscribe();
    tauri::async_runtime::spawn(async move {
        loop {
            match job_rx.recv().await {
                Ok(event) => {
                    if let Err(e) = app_clone.emit(event_names::JOB_PROGRESS, &event) {
                        debug!("Failed to emit job progress event: {}", e);
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                    warn!("Job progress event bridge lagged, missed {} events", n);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    info!("Job progress broadcaster closed, stopping job event bridge");
                    break;
                }
            }
        }
    });

    // Spawn batch progress event listener
    let app_clone = app_handle.clone();
    let mut batch_rx = batch_broadcaster.subscribe();
    tauri::async_runtime::spawn(async move {
        loop {
            match batch_rx.recv().await {
                Ok(event) => {
                    if let Err(e) = app_clone.emit(event_names::BATCH_PROGRESS, &event) {
                        debug!("Failed to emit batch progress event: {}", e);
                    }
                    if event.finished {
                        if let Err(e) = app_clone.emit(event_names::BATCH_FINISHED, &event) {
                            debug!("Failed to emit batch finished event: {}", e);
                        }
                    }
                }
                Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                    warn!("Batch progress event bridge lagged, missed {} events", n);
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                    info!("Batch progress broadcaster closed, stopping batch event bridge");
                    break;
                }
            }
        }
    });
}
