use crate::domain::DirListing;
use crate::error::ListError;
use crate::ports::FileSystemPort;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

/// Symlinks are classified by their target. An entry whose target cannot be
/// resolved for any reason but `NotFound` (dangling link, vanished entry) falls
/// back to its own type, so the walker or the hasher meets the same error and
/// records it instead of the entry disappearing. Anything that is neither a
/// file nor a directory (sockets, fifos) is ignored.
fn classify(target: io::Result<fs::FileType>, own: Option<fs::FileType>) -> Option<EntryKind> {
    let file_type = match target {
        Ok(file_type) => file_type,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
        Err(_) => match own {
            Some(own) if own.is_dir() => return Some(EntryKind::Dir),
            _ => return Some(EntryKind::File),
        },
    };
    if file_type.is_dir() {
        Some(EntryKind::Dir)
    } else if file_type.is_file() {
        Some(EntryKind::File)
    } else {
        None
    }
}

pub struct FileSystemAdapter;

impl FileSystemAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemPort for FileSystemAdapter {
    fn list_dir(&self, dir: &Path) -> Result<DirListing, ListError> {
        let metadata = fs::metadata(dir).map_err(|e| ListError::from_io(dir, e))?;
        if !metadata.is_dir() {
            return Err(ListError::NotADirectory(dir.to_path_buf()));
        }

        let mut listing = DirListing::default();
        for entry in fs::read_dir(dir).map_err(|e| ListError::from_io(dir, e))? {
            let entry = entry.map_err(|e| ListError::from_io(dir, e))?;
            let path = entry.path();
            match classify(fs::metadata(&path).map(|m| m.file_type()), entry.file_type().ok()) {
                Some(EntryKind::Dir) => listing.subdirs.push(path),
                Some(EntryKind::File) => listing.files.push(path),
                None => debug!("Ignoring '{}'", path.display()),
            }
        }

        Ok(listing)
    }

    fn file_len(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_immediate_files_and_subdirs_separately() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::write(dir.path().join("b.txt"), b"bb").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("nested.txt"), b"nested").unwrap();

        let mut listing = FileSystemAdapter::new().list_dir(dir.path()).unwrap();
        listing.files.sort();

        assert_eq!(
            listing.files,
            vec![dir.path().join("a.txt"), dir.path().join("b.txt")]
        );
        assert_eq!(listing.subdirs, vec![dir.path().join("sub")]);
    }

    fn own_type(path: &Path) -> fs::FileType {
        fs::symlink_metadata(path).unwrap().file_type()
    }

    #[test]
    fn resolved_targets_are_classified_by_target_type() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();

        let as_file = classify(Ok(own_type(&file)), Some(own_type(&file)));
        assert_eq!(as_file, Some(EntryKind::File));
        let as_dir = classify(Ok(own_type(dir.path())), Some(own_type(&file)));
        assert_eq!(as_dir, Some(EntryKind::Dir));
    }

    #[test]
    fn vanished_entries_are_dropped() {
        let dir = tempdir().unwrap();
        let gone = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(classify(Err(gone), Some(own_type(dir.path()))), None);
    }

    #[test]
    fn unresolvable_entries_are_kept_for_the_walker() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();
        let denied = || io::Error::from(io::ErrorKind::PermissionDenied);

        assert_eq!(classify(Err(denied()), Some(own_type(&file))), Some(EntryKind::File));
        assert_eq!(classify(Err(denied()), Some(own_type(dir.path()))), Some(EntryKind::Dir));
        assert_eq!(classify(Err(denied()), None), Some(EntryKind::File));
    }

    #[test]
    fn dangling_symlink_is_ignored() {
        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(dir.path().join("nowhere"), dir.path().join("link")).unwrap();
        let listing = FileSystemAdapter::new().list_dir(dir.path()).unwrap();
        assert!(listing.files.is_empty());
        assert!(listing.subdirs.is_empty());
    }

    #[test]
    fn missing_directory_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = FileSystemAdapter::new().list_dir(&missing).unwrap_err();
        assert!(matches!(err, ListError::NotFound(p) if p == missing));
    }

    #[test]
    fn regular_file_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();
        let err = FileSystemAdapter::new().list_dir(&file).unwrap_err();
        assert!(matches!(err, ListError::NotADirectory(_)));
    }

    #[test]
    fn file_len_reports_metadata_size() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("ten.bin");
        fs::write(&file, [0u8; 10]).unwrap();
        assert_eq!(FileSystemAdapter::new().file_len(&file).unwrap(), 10);
    }
}
