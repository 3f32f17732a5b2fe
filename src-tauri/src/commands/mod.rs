//! Tauri commands for the Meshport desktop application.
//!
//! Commands are organized by domain:
//! - `doctor`: Dependency checks
//! - `files`: Folder picking and input listing
//! - `batch`: Metadata validation, batch start and status

pub mod batch;
pub mod doctor;
pub mod files;

// Re-export all commands for convenient registration
pub use batch::*;
pub use doctor::*;
pub use files::*;

use serde::Serialize;

/// Response wrapper for API calls.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
