//! Batch control commands.

use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tauri::State;
use tokio::sync::RwLock;

use meshport::config::{parse_metadata, BatchOptions};

use super::ApiResponse;
use crate::state::TauriAppState;

/// Snapshot of the running (or last) batch for the progress bar.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatus {
    pub running: bool,
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStarted {
    pub total: usize,
}

/// Validates the metadata text without starting anything.
#[tauri::command]
pub async fn validate_metadata(metadata_text: String) -> Result<ApiResponse<()>, String> {
    match parse_metadata(&metadata_text) {
        Ok(_) => Ok(ApiResponse::ok(())),
        Err(e) => Ok(ApiResponse::err(e.to_string())),
    }
}

/// Validates configuration and starts the batch on a background worker.
///
/// Metadata is parsed here, before any file is converted: malformed metadata
/// blocks the whole run.
#[tauri::command]
pub async fn start_batch(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
    input_dir: String,
    output_dir: String,
    keep_materials: bool,
    strip_textures: bool,
    metadata_text: String,
) -> Result<ApiResponse<BatchStarted>, String> {
    let metadata = match parse_metadata(&metadata_text) {
        Ok(metadata) => metadata,
        Err(e) => return Ok(ApiResponse::err(e.to_string())),
    };

    let options = BatchOptions {
        keep_materials,
        strip_textures,
        metadata,
        ..BatchOptions::default()
    };

    let mut state = state.write().await;
    match state.start_batch(PathBuf::from(input_dir), PathBuf::from(output_dir), options) {
        Ok(total) => Ok(ApiResponse::ok(BatchStarted { total })),
        Err(e) => Ok(ApiResponse::err(e)),
    }
}

/// Current batch progress, polled by the UI alongside the pushed events.
#[tauri::command]
pub async fn batch_status(
    state: State<'_, Arc<RwLock<TauriAppState>>>,
) -> Result<ApiResponse<BatchStatus>, String> {
    let state = state.read().await;

    let snapshot = state.batch_progress().map(|p| p.snapshot());
    let status = BatchStatus {
        running: state.is_batch_running(),
        total: snapshot.map(|s| s.total).unwrap_or(0),
        completed: snapshot.map(|s| s.completed).unwrap_or(0),
        failed: snapshot.map(|s| s.failed).unwrap_or(0),
    };

    Ok(ApiResponse::ok(status))
}
