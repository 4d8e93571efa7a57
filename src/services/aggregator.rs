use crate::domain::{Manifest, ResultLine};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock};

/// Shared sink for one walk. Workers borrow it; `into_manifest` takes it by
/// value, so it can only be read once every borrowing worker has been joined.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    lines: Mutex<Vec<ResultLine>>,
    total_bytes: AtomicU64,
    skipped_files: AtomicUsize,
    advisory: OnceLock<String>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&self, line: ResultLine) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line),
            // A panicking producer cannot leave a half-pushed Vec behind.
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }

    /// Adds `bytes` to the running total and returns the new total.
    pub fn add_bytes(&self, bytes: u64) -> u64 {
        self.total_bytes.fetch_add(bytes, Ordering::Relaxed) + bytes
    }

    pub fn record_skipped_file(&self) {
        self.skipped_files.fetch_add(1, Ordering::Relaxed);
    }

    /// Sets the advisory if none is set yet. Returns true for the call that set it.
    pub fn set_advisory(&self, message: &str) -> bool {
        let mut won = false;
        self.advisory.get_or_init(|| {
            won = true;
            message.to_string()
        });
        won
    }

    pub fn into_manifest(self) -> Manifest {
        let lines = match self.lines.into_inner() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        Manifest {
            lines,
            total_bytes: self.total_bytes.into_inner(),
            skipped_files: self.skipped_files.into_inner(),
            advisory: self.advisory.into_inner(),
        }
    }
}
