//! Filesystem utilities and the file collaborator seam.
//!
//! The generator core never reads target documents through `std::fs`
//! directly: all reads go through the [`FileSource`] trait so that the
//! backing tree can be rooted anywhere (or mocked in tests).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

/// Error reading through a [`FileSource`].
#[derive(Debug, Error)]
pub enum FileError {
    /// The requested file does not exist in the source tree.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("failed to read file: {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// The path the failed operation was attempted against.
    pub fn path(&self) -> &Path {
        match self {
            FileError::NotFound { path } | FileError::Io { path, .. } => path,
        }
    }
}

/// A read-only view of the runtime source tree.
///
/// Paths are always relative to the tree root; resolution against the
/// actual location is the implementation's concern.
pub trait FileSource {
    /// Read a file's contents as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, FileError>;

    /// Check whether a file exists.
    fn exists(&self, path: &Path) -> bool;
}

/// [`FileSource`] backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskFiles {
    root: PathBuf,
}

impl DiskFiles {
    /// Create a file source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DiskFiles { root: root.into() }
    }

    /// The root of the backing tree.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileSource for DiskFiles {
    fn read_to_string(&self, path: &Path) -> Result<String, FileError> {
        let full = self.root.join(path);
        match fs::read_to_string(&full) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(FileError::NotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(FileError::Io {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Write a string to a file, creating parent directories if needed.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents)
        .with_context(|| format!("failed to write file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_disk_files_reads_relative_to_root() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("xtensa/esp32")).unwrap();
        fs::write(tmp.path().join("xtensa/esp32/runtime.xml"), "<runtime/>").unwrap();

        let files = DiskFiles::new(tmp.path());
        let text = files
            .read_to_string(Path::new("xtensa/esp32/runtime.xml"))
            .unwrap();
        assert_eq!(text, "<runtime/>");
        assert!(files.exists(Path::new("xtensa/esp32/runtime.xml")));
        assert!(!files.exists(Path::new("xtensa/esp32/missing.xml")));
    }

    #[test]
    fn test_missing_file_preserves_relative_path() {
        let tmp = TempDir::new().unwrap();
        let files = DiskFiles::new(tmp.path());

        let err = files
            .read_to_string(Path::new("arm/stm32/runtime.xml"))
            .unwrap_err();
        match err {
            FileError::NotFound { ref path } => {
                assert_eq!(path, Path::new("arm/stm32/runtime.xml"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
        // The error names the path the caller asked for, not the joined one.
        assert_eq!(err.path(), Path::new("arm/stm32/runtime.xml"));
    }

    #[test]
    fn test_write_string_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("out/esp32/light/target.toml");

        write_string(&target, "name = \"esp32\"").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "name = \"esp32\"");
    }
}
