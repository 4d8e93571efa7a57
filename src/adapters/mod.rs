pub mod cpu_clock;
pub mod filesystem;
pub mod output;
pub mod sha256_hasher;

pub use cpu_clock::{FixedCpuClock, ProcessCpuClock};
pub use filesystem::FileSystemAdapter;
pub use output::ManifestFileWriter;
pub use sha256_hasher::Sha256Hasher;
