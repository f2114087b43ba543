//! Project directory management.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Outcome of [`ensure_project_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    Existing,
}

/// Join the base directory and the confirmed folder name.
pub fn project_path(base_path: &str, folder_name: &str) -> PathBuf {
    Path::new(base_path).join(folder_name)
}

/// Check that `path` exists and is a directory.
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}

/// Create a single directory. The parent must already exist.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|source| Error::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Make sure the project directory exists, creating it if needed.
///
/// A file already sitting at `path` is left alone and reported as an error.
pub fn ensure_project_dir(path: &Path) -> Result<DirStatus> {
    if directory_exists(path) {
        debug!(path = %path.display(), "directory already exists");
        return Ok(DirStatus::Existing);
    }

    create_directory(path)?;
    debug!(path = %path.display(), "directory created");
    Ok(DirStatus::Created)
}

/// Switch the process working directory.
pub fn change_working_directory(path: &Path) -> Result<()> {
    std::env::set_current_dir(path).map_err(|source| Error::ChangeDirectory {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_project_path() {
        assert_eq!(
            project_path("/home/u/Projects", "my_folder"),
            PathBuf::from("/home/u/Projects/my_folder")
        );
    }

    #[test]
    fn test_ensure_creates_then_reuses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project");

        assert_eq!(ensure_project_dir(&path).unwrap(), DirStatus::Created);
        assert!(directory_exists(&path));

        fs::write(path.join("keep.txt"), "data").unwrap();
        assert_eq!(ensure_project_dir(&path).unwrap(), DirStatus::Existing);
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn test_ensure_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taken");
        fs::write(&path, "contents").unwrap();

        let result = ensure_project_dir(&path);
        assert!(matches!(result, Err(Error::DirectoryCreate { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "contents");
    }

    #[test]
    fn test_create_requires_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("project");

        assert!(create_directory(&path).is_err());
        assert!(!dir.path().join("missing").exists());
    }

    #[test]
    fn test_change_working_directory_missing() {
        let dir = TempDir::new().unwrap();
        let result = change_working_directory(&dir.path().join("nope"));
        assert!(matches!(result, Err(Error::ChangeDirectory { .. })));
    }
}
