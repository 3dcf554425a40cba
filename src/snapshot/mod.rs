mod progress;
pub mod row;
pub mod scheduler;
pub mod sink;
pub mod summary;

pub use row::SnapshotRow;
pub use scheduler::SnapshotScheduler;
pub use sink::{CsvSnapshotSink, SnapshotSink};
pub use summary::RunSummary;
