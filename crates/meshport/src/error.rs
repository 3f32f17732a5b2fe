use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Post-processing error: {0}")]
    PostProcess(#[from] PostProcessError),

    #[error("Worker error: {0}")]
    Worker(#[from] WorkerError),
}

/// Fatal configuration errors. These block a batch before any file is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Input folder '{0}' does not exist or is not a directory")]
    InputFolderMissing(PathBuf),

    #[error("Output folder '{0}' does not exist or is not a directory")]
    OutputFolderMissing(PathBuf),

    #[error("Metadata is not valid JSON: {0}")]
    MetadataNotJson(#[source] serde_json::Error),

    #[error("Metadata must be a JSON object, got {found}")]
    MetadataNotObject { found: &'static str },
}

/// Failures of the external converter process. Per-file; the batch continues.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to launch converter '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Converter exited with status {code}: {stderr}")]
    ExitStatus { code: i32, stderr: String },

    #[error("Converter reported success but produced no output at '{0}'")]
    OutputMissing(PathBuf),

    #[error("Failed to prepare output directory '{path}': {source}")]
    PrepareOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures while editing a converter-produced GLB. Per-file; the batch continues.
#[derive(Error, Debug)]
pub enum PostProcessError {
    #[error("Failed to read GLB '{path}': {source}")]
    ReadGlb {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse GLB container '{path}': {source}")]
    ParseContainer {
        path: PathBuf,
        #[source]
        source: gltf::Error,
    },

    #[error("Malformed glTF document in '{path}': {source}")]
    ParseDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize glTF document: {0}")]
    SerializeDocument(#[source] serde_json::Error),

    #[error("Failed to encode GLB container: {0}")]
    EncodeContainer(#[source] gltf::Error),

    #[error("Failed to write GLB '{path}': {source}")]
    WriteGlb {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Directory scan failed for '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, MeshportError>;
