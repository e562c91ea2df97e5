//! Spreadsheet export
//!
//! Reports are plain CSV files: a header row followed by one row per record.
//! Statistics go into a separate two-column summary file.

pub mod report;
pub mod summary;

pub use report::{report_path, ReportRow, ReportWriter};
pub use summary::SummaryRows;
