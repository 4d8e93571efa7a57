use crate::domain::RunConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "treehash")]
#[command(about = "Hash every file under a directory and write a manifest")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Directory to hash recursively")]
    pub input_directory: Option<PathBuf>,

    #[arg(help = "Manifest file to create (existing content is replaced)")]
    pub output_file: Option<PathBuf>,

    #[arg(
        long = "mmap-threshold",
        help = "Memory-map files of at least this many bytes (off by default)"
    )]
    pub mmap_threshold: Option<u64>,

    #[arg(short = 'v', long = "verbose", help = "Log debug output to stderr")]
    pub verbose: bool,
}

impl Cli {
    /// Returns `None` when either positional argument is missing.
    pub fn to_run_config(&self) -> Option<RunConfig> {
        let input_dir = self.input_directory.clone()?;
        let output_file = self.output_file.clone()?;
        Some(
            RunConfig::new(input_dir, output_file)
                .with_mmap_threshold(self.mmap_threshold)
                .with_verbose(self.verbose),
        )
    }
}
