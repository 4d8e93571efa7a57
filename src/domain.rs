use std::fmt;
use std::path::PathBuf;

pub const LIMITED_ACCESS_ADVISORY: &str = "Specified directory contained files or subdirectories \
     with limited access which haven't been processed";

/// One manifest entry: the hex digest of a file and the path it was read from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResultLine {
    pub digest: String,
    pub path: String,
}

impl ResultLine {
    pub fn new(digest: String, path: String) -> Self {
        Self { digest, path }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.digest, self.path)
    }
}

/// Immediate children of one directory, split into the two sets the walker fans out over.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<PathBuf>,
    pub subdirs: Vec<PathBuf>,
}

/// Everything a finished walk produced.
#[derive(Debug, Default)]
pub struct Manifest {
    pub lines: Vec<ResultLine>,
    pub total_bytes: u64,
    pub skipped_files: usize,
    pub advisory: Option<String>,
}

impl Manifest {
    pub fn file_count(&self) -> usize {
        self.lines.len()
    }

    pub fn sorted_lines(&self) -> Vec<ResultLine> {
        let mut lines = self.lines.clone();
        lines.sort();
        lines
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_file: PathBuf,
    /// Files at least this large are memory-mapped; `None` always streams.
    pub mmap_threshold: Option<u64>,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(input_dir: PathBuf, output_file: PathBuf) -> Self {
        Self {
            input_dir,
            output_file,
            mmap_threshold: None,
            verbose: false,
        }
    }

    pub fn with_mmap_threshold(mut self, threshold: Option<u64>) -> Self {
        self.mmap_threshold = threshold;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
