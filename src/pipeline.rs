// src/pipeline.rs
use crate::extractors::{normalize_rows, segment};
use crate::report::{build_report, ReportModel};
use crate::utils::error::PipelineError;

/// Converts raw readout rows into a report model.
///
/// Runs normalize, segment, extract and assemble in one synchronous pass.
/// Either a complete model comes back or a [`PipelineError`]; per-row
/// extraction problems only ever show up as omitted content.
pub fn convert<S: AsRef<str>>(raw_rows: &[Vec<S>]) -> Result<ReportModel, PipelineError> {
    if raw_rows.is_empty() {
        return Err(PipelineError::Structural(
            "readout export contains no rows".to_string(),
        ));
    }

    let rows = normalize_rows(raw_rows);
    tracing::debug!("{} of {} rows left after normalization", rows.len(), raw_rows.len());

    let sections = segment(rows)?;
    Ok(build_report(&sections))
}
