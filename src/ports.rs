use crate::domain::{DirListing, Manifest};
use crate::error::{FileError, ListError};
use anyhow::Result;
use std::io;
use std::path::Path;

pub trait FileSystemPort {
    fn list_dir(&self, dir: &Path) -> Result<DirListing, ListError>;
    fn file_len(&self, path: &Path) -> io::Result<u64>;
}

pub trait HashingPort {
    fn hash_file(&self, path: &Path) -> Result<String, FileError>;
}

pub trait OutputPort {
    fn write_manifest(&self, manifest: &Manifest, footer: &str) -> Result<()>;
}

pub trait CpuClockPort {
    fn cpu_seconds(&self) -> Option<f64>;
}
