use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to enumerate the immediate children of a directory.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("Permission denied: '{0}'")]
    PermissionDenied(PathBuf),
    #[error("Directory not found: '{0}'")]
    NotFound(PathBuf),
    #[error("Not a directory: '{0}'")]
    NotADirectory(PathBuf),
    #[error("Failed to read directory '{0}': {1}")]
    Io(PathBuf, io::Error),
}

impl ListError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::NotFound => ListError::NotFound(path.to_path_buf()),
            _ => ListError::Io(path.to_path_buf(), err),
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ListError::PermissionDenied(_))
    }
}

/// Failure to read or stat one file during the walk.
#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to read '{}': {1}", .0.display())]
    Read(PathBuf, io::Error),
    #[error("Failed to stat '{}': {1}", .0.display())]
    Metadata(PathBuf, io::Error),
}

impl FileError {
    pub fn is_permission_denied(&self) -> bool {
        let (FileError::Read(_, err) | FileError::Metadata(_, err)) = self;
        err.kind() == io::ErrorKind::PermissionDenied
    }
}

/// Fatal conditions that stop a run before a manifest is produced.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Usage: treehash <INPUT_DIRECTORY> <OUTPUT_FILE>")]
    Usage,
    #[error("Invalid path to file: {}", .0.display())]
    OutputPath(PathBuf),
    #[error("No such directory: {}", .0.display())]
    RootNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
