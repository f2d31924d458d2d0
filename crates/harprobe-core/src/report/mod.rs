mod writer;

pub use writer::{ReportWriter, results_path_for};
