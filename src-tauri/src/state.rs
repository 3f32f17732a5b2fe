//! Application state management for Tauri.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{info, warn};
use meshport::broadcast::{
    BatchProgressBroadcaster, BatchProgressEvent, JobProgressBroadcaster, LogBroadcaster,
};
use meshport::config::BatchOptions;
use meshport::worker::{BatchProgress, BatchRunner, BatchSummary};
use meshport::PipelineConfig;

/// Application state managed by Tauri.
pub struct TauriAppState {
    /// Log broadcaster for UI updates.
    pub log_broadcaster: Arc<LogBroadcaster>,

    /// Job progress broadcaster for real-time per-file updates.
    pub job_broadcaster: Arc<JobProgressBroadcaster>,

    /// Batch progress broadcaster driving the progress bar.
    pub batch_broadcaster: Arc<BatchProgressBroadcaster>,

    /// Whether a batch is currently running.
    batch_active: Arc<AtomicBool>,

    /// Progress counters of the current (or last) batch.
    batch_progress: Option<Arc<BatchProgress>>,
}

impl TauriAppState {
    /// Creates a new TauriAppState with default values.
    pub fn new() -> Self {
        Self {
            log_broadcaster: Arc::new(LogBroadcaster::default()),
            job_broadcaster: Arc::new(JobProgressBroadcaster::default()),
            batch_broadcaster: Arc::new(BatchProgressBroadcaster::default()),
            batch_active: Arc::new(AtomicBool::new(false)),
            batch_progress: None,
        }
    }

    pub fn is_batch_running(&self) -> bool {
        self.batch_active.load(Ordering::Relaxed)
    }

    /// Progress counters of the current batch, if one ran.
    pub fn batch_progress(&self) -> Option<&Arc<BatchProgress>> {
        self.batch_progress.as_ref()
    }

    /// Validates folders, scans the input and spawns the batch worker.
    /// Returns the number of files queued.
    pub fn start_batch(
        &mut self,
        input_dir: PathBuf,
        output_dir: PathBuf,
        options: BatchOptions,
    ) -> Result<usize, String> {
        if self.is_batch_running() {
            return Err("A batch is already running".to_string());
        }

        let jobs = BatchRunner::prepare(&input_dir, &output_dir).map_err(|e| e.to_string())?;

        if jobs.is_empty() {
            info!("No FBX files found in {}", input_dir.display());
            self.batch_broadcaster
                .send(BatchProgressEvent::finished(BatchSummary {
                    total: 0,
                    succeeded: 0,
                    failed: 0,
                }));
            return Ok(0);
        }

        let total = jobs.len();
        info!(
            "Starting batch: {} files from {} to {}",
            total,
            input_dir.display(),
            output_dir.display()
        );

        let config = Arc::new(PipelineConfig::new(&output_dir, options));
        let handle = BatchRunner::spawn(
            config,
            jobs,
            Some(self.job_broadcaster.sender()),
            Some(self.batch_broadcaster.sender()),
        );

        self.batch_progress = Some(Arc::clone(handle.progress()));
        self.batch_active.store(true, Ordering::Relaxed);

        // The batch has no cancellation; this thread only waits for the end
        // to flip the running flag and log the tally.
        let active = Arc::clone(&self.batch_active);
        std::thread::spawn(move || {
            let summary = handle.join();
            if summary.failed > 0 {
                warn!(
                    "Batch completed with failures: {} succeeded, {} failed (of {})",
                    summary.succeeded, summary.failed, summary.total
                );
            } else {
                info!(
                    "Batch completed: converted {} FBX files to GLB",
                    summary.succeeded
                );
            }
            active.store(false, Ordering::Relaxed);
        });

        Ok(total)
    }
}

impl Default for TauriAppState {
    fn default() -> Self {
        Self::new()
    }
}
