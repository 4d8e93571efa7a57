use crate::domain::Manifest;
use crate::error::RunError;
use crate::ports::OutputPort;
use anyhow::Result;
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the manifest file. The file is created (truncated) up front so a bad
/// output path is reported before any hashing starts.
pub struct ManifestFileWriter {
    path: PathBuf,
}

impl ManifestFileWriter {
    pub fn create(path: &Path) -> Result<Self, RunError> {
        File::create(path).map_err(|e| {
            debug!("cannot create {}: {e}", path.display());
            RunError::OutputPath(path.to_path_buf())
        })?;
        Ok(Self {
            path: path.to_path_buf(),
        })
    }
}

impl OutputPort for ManifestFileWriter {
    fn write_manifest(&self, manifest: &Manifest, footer: &str) -> Result<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = BufWriter::new(file);
        for line in &manifest.lines {
            writeln!(writer, "{}", line)?;
        }
        write!(writer, "{}", footer)?;
        writer.flush()?;
        Ok(())
    }
}
