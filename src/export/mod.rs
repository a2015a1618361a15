//! Report output.
//!
//! Renders the records of a run into a timestamped plain-text file.

mod text;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::info;

use crate::config::{REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::error_handling::ReportError;
use crate::models::SiteRecord;

pub use text::{format_tech_stack, render_record, render_report};

/// `website_info_output_<YYYYMMDD_HHMMSS>.txt` for the given start time.
pub fn report_file_name(started_at: DateTime<Local>) -> String {
    format!(
        "{}{}.txt",
        REPORT_FILE_PREFIX,
        started_at.format(REPORT_TIMESTAMP_FORMAT)
    )
}

/// Writes the report into `output_dir` and returns the file path.
///
/// The timestamp is captured once by the caller so the name does not depend
/// on how long the run took.
///
/// # Errors
///
/// Returns `ReportError::MissingOutputDir` if `output_dir` is not a directory,
/// and `ReportError::Io` if the file cannot be written.
pub async fn write_report(
    records: &[SiteRecord],
    output_dir: &Path,
    started_at: DateTime<Local>,
) -> Result<PathBuf, ReportError> {
    let is_dir = tokio::fs::metadata(output_dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false);
    if !is_dir {
        return Err(ReportError::MissingOutputDir(
            output_dir.display().to_string(),
        ));
    }

    let path = output_dir.join(report_file_name(started_at));
    tokio::fs::write(&path, render_report(records))
        .await
        .map_err(|source| ReportError::Io {
            path: path.display().to_string(),
            source,
        })?;
    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
