use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Conversion failed: {0}")]
    Convert(#[from] crate::error::ConvertError),

    #[error("Post-processing failed: {0}")]
    PostProcess(#[from] crate::error::PostProcessError),
}
