//! Invocation of the external FBX to GLB converter.
//!
//! The converter is an opaque black box: success is exit code zero AND the
//! destination file existing afterwards. Everything else is surfaced as a
//! per-file error with the captured stderr.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, error};

use crate::error::ConvertError;

/// Upper bound on captured diagnostics carried in errors.
const STDERR_LIMIT: usize = 2000;

pub struct ConverterInvoker {
    command: String,
}

impl ConverterInvoker {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Argument vector for one conversion, matching the converter's CLI:
    /// `-i <input> -o <output> --binary`.
    pub fn build_args(input: &Path, output: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-i"),
            input.as_os_str().to_os_string(),
            OsString::from("-o"),
            output.as_os_str().to_os_string(),
            OsString::from("--binary"),
        ]
    }

    /// Converts one file, blocking until the converter exits.
    ///
    /// No timeout: the worker thread owns the wall-clock for the whole batch.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::PrepareOutput {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!(
            "Invoking '{}' for {} -> {}",
            self.command,
            input.display(),
            output.display()
        );

        let result = Command::new(&self.command)
            .args(Self::build_args(input, output))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ConvertError::Launch {
                command: self.command.clone(),
                source: e,
            })?;

        if !result.status.success() {
            let code = result.status.code().unwrap_or(-1);
            let stderr = capture_diagnostics(&result.stderr, &result.stdout);
            error!(
                "Converter failed for {}: exit code {}, stderr: {}",
                input.display(),
                code,
                stderr
            );
            return Err(ConvertError::ExitStatus { code, stderr });
        }

        // Exit code zero alone is not success: the destination must exist.
        if !output.is_file() {
            return Err(ConvertError::OutputMissing(output.to_path_buf()));
        }

        Ok(())
    }
}

/// Picks stderr for the error message, falling back to stdout when the
/// converter wrote its diagnostics there, truncated for display.
fn capture_diagnostics(stderr: &[u8], stdout: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(stdout)
    } else {
        stderr
    };
    text.trim().chars().take(STDERR_LIMIT).collect()
}
