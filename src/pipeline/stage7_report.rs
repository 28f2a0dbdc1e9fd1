use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::AnalysisError;
use crate::model::scores::FinalAssessment;
use crate::report::ReportMeta;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render_report(
    assessment: &FinalAssessment,
    meta: &ReportMeta,
    format: ReportFormat,
) -> Result<String, AnalysisError> {
    match format {
        ReportFormat::Text => Ok(render_report_text(assessment, meta)),
        ReportFormat::Json => render_summary_json(assessment, meta)
            .map_err(|e| AnalysisError::json("render summary.json", e)),
    }
}

/// Writes `report.txt` and `summary.json` into `out_dir`.
pub fn write_reports(
    assessment: &FinalAssessment,
    meta: &ReportMeta,
    out_dir: &Path,
) -> Result<(), AnalysisError> {
    fs::create_dir_all(out_dir).map_err(|e| AnalysisError::io("create output directory", e))?;

    let report_path = out_dir.join("report.txt");
    let report = render_report(assessment, meta, ReportFormat::Text)?;
    fs::write(&report_path, report).map_err(|e| AnalysisError::io("write report.txt", e))?;

    let summary_path = out_dir.join("summary.json");
    let summary = render_report(assessment, meta, ReportFormat::Json)?;
    fs::write(&summary_path, summary).map_err(|e| AnalysisError::io("write summary.json", e))?;

    info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
