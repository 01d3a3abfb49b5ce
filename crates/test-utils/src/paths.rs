//! Path utilities for locating test data and writing test output.

use std::path::{Path, PathBuf};

/// Returns the workspace root directory.
///
/// This is determined from the test-utils manifest directory, which sits
/// two levels below the root.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Returns the path to `crates/{crate_name}/testdata/`.
pub fn crate_testdata_dir(crate_name: &str) -> PathBuf {
    workspace_root()
        .join("crates")
        .join(crate_name)
        .join("testdata")
}

/// Searches for a test file in multiple locations.
///
/// This function checks the following locations in order:
/// 1. Environment variable `TEST_DATA_DIR` (if set)
/// 2. `res/` at the workspace root, where the CLI expects textures
/// 3. `crates/renderer/testdata/`
///
/// # Returns
///
/// `Some(PathBuf)` if the file is found, `None` otherwise.
pub fn find_test_file(name: &str) -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(test_data_dir) = std::env::var("TEST_DATA_DIR") {
        candidates.push(PathBuf::from(test_data_dir).join(name));
    }

    let root = workspace_root();
    candidates.extend([
        root.join("res").join(name),
        crate_testdata_dir("renderer").join(name),
    ]);

    candidates.into_iter().find(|path| path.exists())
}

/// Creates a temporary directory for test output.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary test directory")
}

/// Path of an output file named `name` inside `dir`. The file is not created.
pub fn temp_output_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_is_valid() {
        let root = workspace_root();
        assert!(
            root.join("Cargo.toml").exists(),
            "Workspace root should contain Cargo.toml: {:?}",
            root
        );
    }

    #[test]
    fn test_crate_testdata_dir() {
        let dir = crate_testdata_dir("renderer");
        assert!(dir.to_string_lossy().contains("renderer"));
        assert!(dir.ends_with("testdata"));
    }

    #[test]
    fn test_missing_file_is_none() {
        assert!(find_test_file("definitely-not-a-texture.png").is_none());
    }

    #[test]
    fn test_temp_output_path() {
        let dir = temp_test_dir();
        let path = temp_output_path(dir.path(), "map.png");
        assert!(dir.path().is_dir());
        assert_eq!(path.file_name().unwrap(), "map.png");
        assert!(!path.exists());
    }
}
