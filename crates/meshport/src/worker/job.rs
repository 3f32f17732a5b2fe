use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub source_path: PathBuf,
    /// MIME type of the source file, when the extension is known.
    pub mime_type: Option<String>,
}

impl Job {
    pub fn new(source_path: PathBuf) -> Self {
        let mime_type = Self::detect_mime_type(&source_path);
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            source_path,
            mime_type,
        }
    }

    /// Detects MIME type from file path using the mime_guess crate.
    /// Returns `None` for unknown extensions (FBX is typically unknown).
    fn detect_mime_type(path: &Path) -> Option<String> {
        mime_guess::from_path(path).first().map(|m| m.to_string())
    }
}

#[derive(Debug)]
pub struct JobResult {
    pub job_id: String,
    pub source_path: PathBuf,
    pub success: bool,
    pub output_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl JobResult {
    pub fn success(job: &Job, output_path: PathBuf) -> Self {
        Self {
            job_id: job.id.clone(),
            source_path: job.source_path.clone(),
            success: true,
            output_path: Some(output_path),
            error: None,
        }
    }

    pub fn failure(job: &Job, error: String) -> Self {
        Self {
            job_id: job.id.clone(),
            source_path: job.source_path.clone(),
            success: false,
            output_path: None,
            error: Some(error),
        }
    }
}
