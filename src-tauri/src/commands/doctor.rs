//! Dependency check commands.

use meshport::doctor::DoctorReport;

use super::ApiResponse;

/// Checks converter and library availability. Purely informational.
#[tauri::command]
pub async fn check_dependencies() -> Result<ApiResponse<DoctorReport>, String> {
    let report = meshport::doctor::check(meshport::DEFAULT_CONVERTER);
    if report.all_available() {
        log::info!("All dependencies available");
    } else {
        log::warn!("Missing dependencies: {}", report.missing().join(", "));
    }
    Ok(ApiResponse::ok(report))
}
