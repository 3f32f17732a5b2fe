//! Dependency checks surfaced by the UI's "check dependencies" action.
//!
//! Non-fatal and purely informational: a missing converter is reported, not
//! raised. The GLB editing library is compiled in and listed so the report
//! covers everything the tool needs at runtime.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Availability of a single dependency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyStatus {
    pub name: String,
    pub available: bool,
    /// Resolved path, version, or a hint on how to install.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Report over all dependencies, in check order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorReport {
    pub dependencies: Vec<DependencyStatus>,
}

impl DoctorReport {
    pub fn all_available(&self) -> bool {
        self.dependencies.iter().all(|d| d.available)
    }

    pub fn missing(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter(|d| !d.available)
            .map(|d| d.name.as_str())
            .collect()
    }
}

/// Runs all dependency checks for the given converter command.
pub fn check(converter: &str) -> DoctorReport {
    let mut dependencies = Vec::new();

    match resolve_converter(converter) {
        Some(path) => dependencies.push(DependencyStatus {
            name: converter.to_string(),
            available: true,
            detail: Some(path.display().to_string()),
        }),
        None => dependencies.push(DependencyStatus {
            name: converter.to_string(),
            available: false,
            detail: Some(
                "install from https://github.com/facebookincubator/FBX2glTF".to_string(),
            ),
        }),
    }

    // The container-editing library is a compile-time dependency.
    dependencies.push(DependencyStatus {
        name: "gltf (GLB container editing)".to_string(),
        available: true,
        detail: Some("statically linked".to_string()),
    });

    DoctorReport { dependencies }
}

/// Resolves the converter command to an executable path.
///
/// A command containing a path separator is checked directly; a bare name is
/// searched in the directories of `PATH`.
pub fn resolve_converter(command: &str) -> Option<PathBuf> {
    let as_path = Path::new(command);
    if command.contains(std::path::MAIN_SEPARATOR) || command.contains('/') {
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }

    let path_var = env::var_os("PATH")?;
    search_dirs(command, env::split_paths(&path_var))
}

/// Searches the given directories for an executable named `command`.
fn search_dirs(command: &str, dirs: impl Iterator<Item = PathBuf>) -> Option<PathBuf> {
    for dir in dirs {
        let candidate = dir.join(command);
        if is_executable(&candidate) {
            return Some(candidate);
        }

        #[cfg(windows)]
        for ext in ["exe", "bat", "cmd"] {
            let candidate = dir.join(format!("{command}.{ext}"));
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn make_executable(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn test_search_dirs_finds_executable() {
        let temp_dir = TempDir::new().unwrap();
        let expected = make_executable(temp_dir.path(), "fbx2gltf");

        let found = search_dirs("fbx2gltf", std::iter::once(temp_dir.path().to_path_buf()));
        assert_eq!(found, Some(expected));
    }

    #[cfg(unix)]
    #[test]
    fn test_search_dirs_skips_non_executable_files() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("fbx2gltf"), "not a binary").unwrap();

        let found = search_dirs("fbx2gltf", std::iter::once(temp_dir.path().to_path_buf()));
        assert_eq!(found, None);
    }

    #[test]
    fn test_search_dirs_empty() {
        assert_eq!(search_dirs("fbx2gltf", std::iter::empty()), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_converter_direct_path() {
        let temp_dir = TempDir::new().unwrap();
        let exe = make_executable(temp_dir.path(), "converter");

        let resolved = resolve_converter(exe.to_str().unwrap());
        assert_eq!(resolved, Some(exe));

        let missing = temp_dir.path().join("missing");
        assert_eq!(resolve_converter(missing.to_str().unwrap()), None);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_check_with_path_env() {
        let temp_dir = TempDir::new().unwrap();
        make_executable(temp_dir.path(), "meshport-test-converter");

        // Prepend the temp dir; the rest of PATH stays intact so concurrent
        // tests can still spawn their own processes.
        let original_path = env::var_os("PATH");
        let mut dirs = vec![temp_dir.path().to_path_buf()];
        if let Some(ref path) = original_path {
            dirs.extend(env::split_paths(path));
        }
        env::set_var("PATH", env::join_paths(dirs).unwrap());

        let report = check("meshport-test-converter");
        assert!(report.all_available());
        assert!(report.missing().is_empty());

        let report = check("meshport-test-converter-missing");
        assert!(!report.all_available());
        assert_eq!(report.missing(), vec!["meshport-test-converter-missing"]);

        match original_path {
            Some(path) => env::set_var("PATH", path),
            None => env::remove_var("PATH"),
        }
    }

    #[test]
    fn test_report_always_lists_container_library() {
        let report = check("definitely-not-on-path-12345");
        assert!(report
            .dependencies
            .iter()
            .any(|d| d.name.starts_with("gltf") && d.available));
    }
}
