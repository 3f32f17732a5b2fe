use std::path::{Path, PathBuf};

use crate::config::BatchOptions;

/// Shared, read-only configuration for every job in a batch run.
pub struct PipelineConfig {
    pub output_directory: PathBuf,
    pub options: BatchOptions,
}

impl PipelineConfig {
    pub fn new<P: AsRef<Path>>(output_directory: P, options: BatchOptions) -> Self {
        Self {
            output_directory: output_directory.as_ref().to_path_buf(),
            options,
        }
    }

    /// Destination for one input: same base name, `.glb` extension, in the
    /// output folder.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "output".to_string());
        self.output_directory.join(format!("{stem}.glb"))
    }
}
