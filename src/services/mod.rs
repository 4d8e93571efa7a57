pub mod aggregator;
pub mod report;
pub mod tree_hasher;

pub use aggregator::ResultAggregator;
pub use report::ReportFormatter;
pub use tree_hasher::TreeHashService;
