//! JSON report writer.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::report::AnalysisReport;

/// Serializes a report to pretty-printed JSON.
pub fn report_to_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Writes a report to a JSON file.
pub fn write_report_json(report: &AnalysisReport, path: &Path) -> Result<()> {
    let json = report_to_json(report)?;
    fs::write(path, json)?;
    Ok(())
}
