//! Test harness for isolated batch runs.
//!
//! The `TestHarness` struct provides a complete isolated environment for
//! exercising the conversion pipeline end to end: temporary input/output
//! folders, a fake converter executable that produces a prepared GLB
//! fixture, and helpers to inspect the post-processed outputs.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::TempDir;

use meshport::config::BatchOptions;
use meshport::postprocess::GlbDocument;
use meshport::worker::{BatchRunner, BatchSummary, DirectoryScanner};
use meshport::PipelineConfig;

pub mod builders;

/// Isolated environment for one batch-run test.
pub struct TestHarness {
    /// Temporary directory containing input/output subdirectories.
    temp_dir: TempDir,
    /// Path to the input directory within temp_dir.
    pub input_dir: PathBuf,
    /// Path to the output directory within temp_dir.
    pub output_dir: PathBuf,
    /// Path to the fake converter executable.
    pub converter: PathBuf,
}

impl TestHarness {
    /// Creates a harness whose fake converter emits a textured GLB fixture.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base = temp_dir.path();

        let input_dir = base.join("input");
        let output_dir = base.join("output");
        std::fs::create_dir_all(&input_dir).expect("Failed to create input dir");
        std::fs::create_dir_all(&output_dir).expect("Failed to create output dir");

        let fixture = base.join("fixture.glb");
        builders::write_textured_glb(&fixture);
        let converter = builders::write_fake_converter(base, &fixture);

        Self {
            temp_dir,
            input_dir,
            output_dir,
            converter,
        }
    }

    /// Get the base temp directory path.
    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Drops an FBX input file into the input folder.
    pub fn add_fbx(&self, name: &str) {
        std::fs::write(self.input_dir.join(name), b"fbx bytes").expect("Failed to write input");
    }

    /// Batch options wired to the fake converter.
    pub fn options(&self) -> BatchOptions {
        BatchOptions {
            converter: self.converter.to_string_lossy().into_owned(),
            ..BatchOptions::default()
        }
    }

    /// Scans the input folder and runs the whole batch to completion.
    pub fn run_batch(&self, options: BatchOptions) -> BatchSummary {
        let jobs = DirectoryScanner::new(&self.input_dir)
            .scan()
            .expect("Scan failed");
        let config = Arc::new(PipelineConfig::new(&self.output_dir, options));
        BatchRunner::spawn(config, jobs, None, None).join()
    }

    /// Lists the file names present in the output folder, sorted.
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(&self.output_dir)
            .expect("Failed to read output dir")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    /// Opens a post-processed output by file name.
    pub fn open_output(&self, name: &str) -> GlbDocument {
        GlbDocument::open(&self.output_dir.join(name)).expect("Failed to open output GLB")
    }
}
