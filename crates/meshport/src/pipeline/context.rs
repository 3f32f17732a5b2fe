use std::path::PathBuf;

use crate::worker::job::Job;

pub struct PipelineContext {
    // Input
    pub job: Job,

    // Step 1 result — guaranteed Some after step_convert
    pub output_path: Option<PathBuf>,
}

impl PipelineContext {
    pub fn new(job: Job) -> Self {
        Self {
            job,
            output_path: None,
        }
    }
}
