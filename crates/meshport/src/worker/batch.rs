use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver};
use log::{debug, error, info, warn};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::broadcast::batch_progress::BatchProgressEvent;
use crate::broadcast::job_progress::{JobPhase, JobProgressEvent};
use crate::error::ConfigError;
use crate::pipeline::progress::{BroadcastProgress, NoopProgress, ProgressReporter};
use crate::pipeline::{Pipeline, PipelineConfig, PipelineContext};
use crate::worker::job::{Job, JobResult};
use crate::worker::scanner::DirectoryScanner;

/// Shared progress counters, readable from the UI thread while the worker
/// runs.
pub struct BatchProgress {
    total: AtomicUsize,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchProgressSnapshot {
    pub total: usize,
    pub completed: usize,
    pub failed: usize,
}

impl BatchProgress {
    fn new(total: usize) -> Self {
        Self {
            total: AtomicUsize::new(total),
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    fn record(&self, success: bool) {
        self.completed.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.failed.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> BatchProgressSnapshot {
        BatchProgressSnapshot {
            total: self.total.load(Ordering::Relaxed),
            completed: self.completed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
        }
    }
}

/// Final tally of a batch run.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs a batch of conversion jobs sequentially on one background thread.
///
/// One thread, not a pool: conversions are I/O and subprocess bound, and the
/// thread exists to keep the UI responsive, not for throughput. Sequential
/// execution over a FIFO channel also guarantees results arrive in discovery
/// order.
pub struct BatchRunner;

impl BatchRunner {
    /// Validates the batch folders and lists the jobs in discovery order.
    /// A failure here is fatal configuration: nothing has been touched yet.
    pub fn prepare(
        input_dir: &std::path::Path,
        output_dir: &std::path::Path,
    ) -> crate::error::Result<Vec<Job>> {
        if !input_dir.is_dir() {
            return Err(ConfigError::InputFolderMissing(input_dir.to_path_buf()).into());
        }
        if !output_dir.is_dir() {
            return Err(ConfigError::OutputFolderMissing(output_dir.to_path_buf()).into());
        }
        Ok(DirectoryScanner::new(input_dir).scan()?)
    }

    pub fn spawn(
        config: Arc<PipelineConfig>,
        jobs: Vec<Job>,
        job_sender: Option<Arc<broadcast::Sender<JobProgressEvent>>>,
        batch_sender: Option<Arc<broadcast::Sender<BatchProgressEvent>>>,
    ) -> BatchHandle {
        let total = jobs.len();
        let progress = Arc::new(BatchProgress::new(total));

        // Capacity covers every result so the worker never blocks on an
        // undrained receiver.
        let (result_tx, result_rx) = bounded::<JobResult>(total.max(1));

        let worker_progress = Arc::clone(&progress);
        let worker = thread::spawn(move || {
            run_batch(
                config,
                jobs,
                result_tx,
                worker_progress,
                job_sender,
                batch_sender,
            )
        });

        info!("Started batch worker for {} jobs", total);

        BatchHandle {
            worker,
            progress,
            result_receiver: result_rx,
        }
    }
}

pub struct BatchHandle {
    worker: JoinHandle<BatchSummary>,
    progress: Arc<BatchProgress>,
    result_receiver: Receiver<JobResult>,
}

impl BatchHandle {
    pub fn progress(&self) -> &Arc<BatchProgress> {
        &self.progress
    }

    pub fn try_recv_result(&self) -> Option<JobResult> {
        self.result_receiver.try_recv().ok()
    }

    pub fn recv_result(&self) -> Option<JobResult> {
        self.result_receiver.recv().ok()
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Blocks until the batch completes. There is no cancellation: once
    /// started, a batch runs every job.
    pub fn join(self) -> BatchSummary {
        match self.worker.join() {
            Ok(summary) => summary,
            Err(e) => {
                error!("Batch worker panicked: {:?}", e);
                let snapshot = self.progress.snapshot();
                BatchSummary {
                    total: snapshot.total,
                    succeeded: snapshot.completed.saturating_sub(snapshot.failed),
                    failed: snapshot.failed,
                }
            }
        }
    }
}

fn run_batch(
    config: Arc<PipelineConfig>,
    jobs: Vec<Job>,
    result_sender: crossbeam_channel::Sender<JobResult>,
    progress: Arc<BatchProgress>,
    job_sender: Option<Arc<broadcast::Sender<JobProgressEvent>>>,
    batch_sender: Option<Arc<broadcast::Sender<BatchProgressEvent>>>,
) -> BatchSummary {
    let total = jobs.len();
    let pipeline = Pipeline::from_config(config);
    let mut succeeded = 0;
    let mut failed = 0;

    for job in jobs {
        debug!("Processing job: {:?}", job.source_path);

        let filename = job
            .source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        if let Some(ref sender) = batch_sender {
            let _ = sender.send(BatchProgressEvent::running(
                progress.snapshot(),
                Some(filename.clone()),
            ));
        }

        let result = if let Some(ref sender) = job_sender {
            let source_path = job.source_path.to_string_lossy().into_owned();
            let reporter = BroadcastProgress::new(
                &job.id,
                &filename,
                &source_path,
                job.mime_type.as_deref(),
                Arc::clone(sender),
            );

            reporter.report(crate::pipeline::ProgressEvent::Phase {
                phase: JobPhase::Queued,
                message: "Job queued for conversion".to_string(),
            });

            let ctx = PipelineContext::new(job);
            let (result, _ctx) = pipeline.run(ctx, &reporter);
            result
        } else {
            let ctx = PipelineContext::new(job);
            let (result, _ctx) = pipeline.run(ctx, &NoopProgress);
            result
        };

        progress.record(result.success);
        if result.success {
            succeeded += 1;
        } else {
            failed += 1;
            warn!(
                "Job failed: {} - {:?}",
                result.source_path.display(),
                result.error
            );
        }

        if let Some(ref sender) = batch_sender {
            let _ = sender.send(BatchProgressEvent::running(progress.snapshot(), None));
        }

        // A dropped receiver must not stop the batch; jobs still run.
        if result_sender.send(result).is_err() {
            debug!("Result receiver dropped, continuing batch");
        }
    }

    let summary = BatchSummary {
        total,
        succeeded,
        failed,
    };

    if let Some(ref sender) = batch_sender {
        let _ = sender.send(BatchProgressEvent::finished(summary));
    }

    info!(
        "Batch finished: {} succeeded, {} failed (of {})",
        succeeded, failed, total
    );

    summary
}
