pub mod broadcast;
pub mod config;
pub mod convert;
pub mod doctor;
pub mod error;
pub mod pipeline;
pub mod postprocess;
pub mod worker;

#[cfg(test)]
pub(crate) mod testutil;

pub use broadcast::{BatchProgressBroadcaster, JobProgressBroadcaster, LogBroadcaster};
pub use config::{parse_metadata, BatchOptions, DEFAULT_CONVERTER};
pub use doctor::{check, DoctorReport};
pub use error::{
    ConfigError, ConvertError, MeshportError, PostProcessError, Result, WorkerError,
};
pub use pipeline::{Pipeline, PipelineConfig, PipelineContext};
pub use worker::{BatchHandle, BatchRunner, BatchSummary, DirectoryScanner, Job};
