use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::error::WorkerError;
use crate::worker::job::Job;

/// Extension of the input files the batch picks up.
const INPUT_EXTENSION: &str = "fbx";

pub struct DirectoryScanner {
    input_directory: PathBuf,
}

impl DirectoryScanner {
    pub fn new<P: AsRef<Path>>(input_directory: P) -> Self {
        Self {
            input_directory: input_directory.as_ref().to_path_buf(),
        }
    }

    pub fn input_directory(&self) -> &Path {
        &self.input_directory
    }

    /// Lists FBX files in the input folder, sorted by file name.
    ///
    /// Sorted order is the batch's discovery order; results are reported in
    /// this order. Only the top level is scanned.
    pub fn scan(&self) -> Result<Vec<Job>, WorkerError> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.input_directory)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
        {
            let entry = entry.map_err(|e| WorkerError::ScanFailed {
                path: self.input_directory.clone(),
                source: e,
            })?;
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                if ext.eq_ignore_ascii_case(INPUT_EXTENSION) {
                    debug!("Found input file: {}", path.display());
                    paths.push(path.to_path_buf());
                }
            }
        }

        paths.sort();

        info!(
            "Scanned {} FBX files in {}",
            paths.len(),
            self.input_directory.display()
        );
        Ok(paths.into_iter().map(Job::new).collect())
    }
}
