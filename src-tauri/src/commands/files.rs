//! File and folder commands.

use meshport::worker::DirectoryScanner;

use super::ApiResponse;

/// Open native folder picker dialog (no side effects).
#[tauri::command]
pub async fn pick_folder(app: tauri::AppHandle) -> Result<ApiResponse<Option<String>>, String> {
    use tauri_plugin_dialog::DialogExt;

    let folder_path = app.dialog().file().blocking_pick_folder();

    match folder_path {
        Some(path) => Ok(ApiResponse::ok(Some(path.to_string()))),
        None => Ok(ApiResponse::ok(None)),
    }
}

/// Lists the FBX file names the batch would pick up, in discovery order.
#[tauri::command]
pub async fn list_input_files(input_dir: String) -> Result<ApiResponse<Vec<String>>, String> {
    let scanner = DirectoryScanner::new(&input_dir);
    match scanner.scan() {
        Ok(jobs) => {
            let names = jobs
                .iter()
                .filter_map(|j| j.source_path.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            Ok(ApiResponse::ok(names))
        }
        Err(e) => Ok(ApiResponse::err(e.to_string())),
    }
}
