use crate::error::FileError;
use crate::ports::HashingPort;
use memmap2::MmapOptions;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// SHA-256 file hasher. Holds no hashing state, so one instance is shared by every worker.
///
/// Memory mapping is off unless a threshold is set: a mapped file truncated by
/// another process mid-hash raises SIGBUS, which no per-file policy can catch.
pub struct Sha256Hasher {
    mmap_threshold: Option<u64>,
}

impl Sha256Hasher {
    pub fn new() -> Self {
        Self {
            mmap_threshold: None,
        }
    }

    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = Some(threshold);
        self
    }

    /// Digests a stream from its current position to EOF.
    pub fn hash_reader<R: Read>(&self, reader: &mut R) -> io::Result<String> {
        let mut hasher = Sha256::new();
        let mut buffer = [0; 8192];
        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            hasher.update(&buffer[..bytes_read]);
        }
        Ok(format!("{:X}", hasher.finalize()))
    }

    fn uses_mmap(&self, file_size: u64) -> bool {
        // Zero-length files cannot be mapped.
        self.mmap_threshold
            .is_some_and(|threshold| file_size > 0 && file_size >= threshold)
    }

    fn hash_with_mmap(&self, file: &File) -> io::Result<String> {
        let mmap = unsafe { MmapOptions::new().map(file)? };
        let mut hasher = Sha256::new();
        hasher.update(&mmap[..]);
        Ok(format!("{:X}", hasher.finalize()))
    }

    fn hash_with_buffered_io(&self, file: File) -> io::Result<String> {
        let mut reader = BufReader::new(file);
        self.hash_reader(&mut reader)
    }

    fn hash_open_file(&self, file: File) -> io::Result<String> {
        if self.uses_mmap(file.metadata()?.len()) {
            self.hash_with_mmap(&file)
        } else {
            self.hash_with_buffered_io(file)
        }
    }
}

impl Default for Sha256Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingPort for Sha256Hasher {
    fn hash_file(&self, path: &Path) -> Result<String, FileError> {
        File::open(path)
            .and_then(|file| self.hash_open_file(file))
            .map_err(|e| FileError::Read(path.to_path_buf(), e))
    }
}
