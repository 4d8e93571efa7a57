use crate::domain::{DirListing, LIMITED_ACCESS_ADVISORY, Manifest, ResultLine};
use crate::error::{FileError, ListError, RunError};
use crate::ports::{FileSystemPort, HashingPort};
use crate::services::ResultAggregator;
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::path::Path;

/// Walks a directory tree on the current rayon pool and hashes every file in it.
///
/// Each directory is listed once; its files and its subdirectories are then
/// fanned out as two concurrent `par_iter` sets, with subdirectories recursing
/// back into the walker. Rayon's work stealing bounds the number of threads
/// regardless of tree width or depth.
pub struct TreeHashService<F, H> {
    filesystem: F,
    hasher: H,
}

impl<F, H> TreeHashService<F, H>
where
    F: FileSystemPort + Sync,
    H: HashingPort + Sync,
{
    pub fn new(filesystem: F, hasher: H) -> Self {
        Self { filesystem, hasher }
    }

    /// Hashes everything under `root`.
    ///
    /// A missing root (or one that is not a directory) is fatal. Access denial
    /// anywhere in the tree, the root included, only sets the manifest's
    /// advisory.
    pub fn hash_tree(&self, root: &Path) -> Result<Manifest, RunError> {
        let aggregator = ResultAggregator::new();
        debug!("Walking {}", root.display());

        match self.filesystem.list_dir(root) {
            Ok(listing) => self.fan_out(listing, &aggregator),
            Err(ListError::NotFound(_) | ListError::NotADirectory(_)) => {
                return Err(RunError::RootNotFound(root.to_path_buf()));
            }
            Err(ListError::PermissionDenied(path)) => {
                warn!("Permission denied: '{}'", path.display());
                aggregator.set_advisory(LIMITED_ACCESS_ADVISORY);
            }
            Err(ListError::Io(_, err)) => return Err(RunError::Io(err)),
        }

        let manifest = aggregator.into_manifest();
        info!(
            "Hashed {} files ({} bytes) under {}; {} skipped",
            manifest.file_count(),
            manifest.total_bytes,
            root.display(),
            manifest.skipped_files
        );
        Ok(manifest)
    }

    fn walk_dir(&self, dir: &Path, aggregator: &ResultAggregator) {
        match self.filesystem.list_dir(dir) {
            Ok(listing) => self.fan_out(listing, aggregator),
            Err(err) => {
                warn!("{err}; skipping subtree");
                if err.is_permission_denied() {
                    aggregator.set_advisory(LIMITED_ACCESS_ADVISORY);
                }
            }
        }
    }

    fn fan_out(&self, listing: DirListing, aggregator: &ResultAggregator) {
        let DirListing { files, subdirs } = listing;
        rayon::join(
            || {
                files
                    .par_iter()
                    .for_each(|path| self.process_file(path, aggregator))
            },
            || {
                subdirs
                    .par_iter()
                    .for_each(|dir| self.walk_dir(dir, aggregator))
            },
        );
    }

    fn process_file(&self, path: &Path, aggregator: &ResultAggregator) {
        match self.hash_one(path) {
            Ok((line, len)) => {
                trace!("{line}");
                aggregator.push_line(line);
                aggregator.add_bytes(len);
            }
            Err(err) => {
                warn!("Skipping '{}': {err}", path.display());
                aggregator.record_skipped_file();
                if err.is_permission_denied() {
                    aggregator.set_advisory(LIMITED_ACCESS_ADVISORY);
                }
            }
        }
    }

    fn hash_one(&self, path: &Path) -> Result<(ResultLine, u64), FileError> {
        let digest = self.hasher.hash_file(path)?;
        let len = self
            .filesystem
            .file_len(path)
            .map_err(|e| FileError::Metadata(path.to_path_buf(), e))?;
        // Non-UTF-8 path bytes are replaced, so the manifest is always valid UTF-8.
        Ok((ResultLine::new(digest, path.display().to_string()), len))
    }
}
