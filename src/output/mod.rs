//! Output writers for reports and record exports.
//!
//! - [`json_writer`] — the full [`AnalysisReport`](crate::report::AnalysisReport) as JSON
//! - [`csv_writer`] — parsed records as semicolon-delimited CSV

pub mod csv_writer;
pub mod json_writer;

pub use csv_writer::write_records_csv;
pub use json_writer::{report_to_json, write_report_json};
