use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::errors::ReportError;

/// File name of the averaged raw report. External contract.
pub const AVERAGE_RAW_REPORT_FILENAME: &str = "average_score_readiness_report.json";

/// File name of the averaged final report. External contract.
pub const AVERAGE_FINAL_REPORT_FILENAME: &str = "average_score_final_readiness_report.json";

/// File name of the persisted raw report for one dataset. External
/// contract.
pub fn raw_report_filename(dataset_id: &str) -> String {
    format!("{dataset_id}_raw_readiness_report.json")
}

/// File name of the persisted final report for one dataset. External
/// contract.
pub fn final_report_filename(dataset_id: &str) -> String {
    format!("{dataset_id}_final_readiness_report.json")
}

/// Write a report artifact as pretty-printed JSON, creating the output
/// directory on first use. Returns the written path.
pub fn write_json_report<T: Serialize>(
    out_dir: &Path,
    filename: &str,
    report: &T,
) -> Result<PathBuf, ReportError> {
    std::fs::create_dir_all(out_dir)?;
    let path = out_dir.join(filename);
    std::fs::write(&path, serde_json::to_vec_pretty(report)?)?;
    info!(path = %path.display(), "wrote report");
    Ok(path)
}
