use std::sync::Arc;

use tracing::info_span;

use crate::broadcast::job_progress::JobPhase;
use crate::convert::ConverterInvoker;
use crate::postprocess::GlbPostProcessor;
use crate::worker::job::JobResult;

use super::config::PipelineConfig;
use super::context::PipelineContext;
use super::error::PipelineError;
use super::progress::{ProgressEvent, ProgressReporter};

pub struct Pipeline {
    config: Arc<PipelineConfig>,
    invoker: ConverterInvoker,
    postprocessor: GlbPostProcessor,
}

impl Pipeline {
    /// Production constructor — builds all sub-components from config.
    pub fn from_config(config: Arc<PipelineConfig>) -> Self {
        let invoker = ConverterInvoker::new(config.options.converter.clone());
        let postprocessor = GlbPostProcessor::new(&config.options);

        Self {
            config,
            invoker,
            postprocessor,
        }
    }

    /// Runs the full pipeline for a single file.
    /// Returns a (JobResult, PipelineContext) pair.
    pub fn run(
        &self,
        mut ctx: PipelineContext,
        progress: &dyn ProgressReporter,
    ) -> (JobResult, PipelineContext) {
        let filename = ctx
            .job
            .source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());
        let _pipeline_span = info_span!("pipeline",
            job_id = %ctx.job.id,
            filename = %filename,
        )
        .entered();

        // Step 1: Convert
        {
            let _step = info_span!("convert").entered();
            progress.report(ProgressEvent::Phase {
                phase: JobPhase::Converting,
                message: format!("Running {}...", self.invoker.command()),
            });
            if let Err(e) = self.step_convert(&mut ctx) {
                let err_msg = e.to_string();
                progress.report(ProgressEvent::Failed {
                    error: err_msg.clone(),
                });
                return (JobResult::failure(&ctx.job, err_msg), ctx);
            }
        }

        // Step 2: Post-process
        {
            let _step = info_span!("post_process").entered();
            progress.report(ProgressEvent::Phase {
                phase: JobPhase::PostProcessing,
                message: "Cleaning up GLB and writing metadata...".to_string(),
            });
            if let Err(e) = self.step_post_process(&ctx) {
                let err_msg = e.to_string();
                progress.report(ProgressEvent::Failed {
                    error: err_msg.clone(),
                });
                return (JobResult::failure(&ctx.job, err_msg), ctx);
            }
        }

        let output_path = ctx.output_path.clone().expect("output_path set in step 1");
        progress.report(ProgressEvent::Completed {
            output_path: output_path.display().to_string(),
        });

        let result = JobResult::success(&ctx.job, output_path);
        (result, ctx)
    }

    fn step_convert(&self, ctx: &mut PipelineContext) -> Result<(), PipelineError> {
        let output_path = self.config.output_path_for(&ctx.job.source_path);
        self.invoker.convert(&ctx.job.source_path, &output_path)?;
        ctx.output_path = Some(output_path);
        Ok(())
    }

    fn step_post_process(&self, ctx: &PipelineContext) -> Result<(), PipelineError> {
        let output_path = ctx.output_path.as_ref().expect("step 1 completed");
        self.postprocessor.process(output_path)?;
        Ok(())
    }
}
