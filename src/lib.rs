pub mod adapters;
pub mod cli;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

use adapters::{FileSystemAdapter, ManifestFileWriter, Sha256Hasher};
use domain::{Manifest, RunConfig};
use error::RunError;
use ports::{CpuClockPort, FileSystemPort, OutputPort};
use services::{ReportFormatter, TreeHashService};

/// Creates the output file, walks the input tree, then appends the result
/// lines and the throughput footer. Returns the manifest so the caller can
/// surface the advisory.
pub fn run(config: &RunConfig, clock: &impl CpuClockPort) -> anyhow::Result<Manifest> {
    run_with(config, FileSystemAdapter::new(), clock)
}

/// `run` over an arbitrary filesystem.
pub fn run_with<F>(
    config: &RunConfig,
    filesystem: F,
    clock: &impl CpuClockPort,
) -> anyhow::Result<Manifest>
where
    F: FileSystemPort + Sync,
{
    let writer = ManifestFileWriter::create(&config.output_file)?;

    let mut hasher = Sha256Hasher::new();
    if let Some(threshold) = config.mmap_threshold {
        hasher = hasher.with_mmap_threshold(threshold);
    }
    let service = TreeHashService::new(filesystem, hasher);
    let manifest = service.hash_tree(&config.input_dir)?;

    let footer = ReportFormatter::manifest_footer(&manifest, clock.cpu_seconds());
    writer.write_manifest(&manifest, &footer)?;
    Ok(manifest)
}

/// Fatal conditions the binary reports as a plain message.
pub fn as_run_error(err: &anyhow::Error) -> Option<&RunError> {
    err.downcast_ref::<RunError>()
}
