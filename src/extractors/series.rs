// src/extractors/series.rs
//! Numeric series for the chart sections.
//!
//! Extraction is resilient: a row whose cells fail coercion is logged at
//! warn level and skipped, and the rest of the section is still scanned.

use crate::extractors::row::Row;
use crate::extractors::section::is_section_start;
use crate::utils::error::CoercionWarning;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Unit marker a speed-range label must carry.
pub const SPEED_RANGE_UNIT: &str = "r/min";

// --- Coercion ---
pub fn coerce_f64(cell: Option<&str>) -> Result<f64, CoercionWarning> {
    let raw = cell.unwrap_or_default();
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoercionWarning {
            cell: raw.to_string(),
            target: "number",
        })
}

pub fn coerce_index(cell: Option<&str>) -> Result<u32, CoercionWarning> {
    let raw = cell.unwrap_or_default();
    raw.parse::<u32>().map_err(|_| CoercionWarning {
        cell: raw.to_string(),
        target: "integer index",
    })
}

/// Rows after the section marker.
fn body(rows: &[Row]) -> impl Iterator<Item = &Row> {
    rows.iter().filter(|r| !is_section_start(r))
}

/// Operating hours per engine speed range: `[label, hours]` rows whose label
/// carries [`SPEED_RANGE_UNIT`] and whose hours are strictly positive.
pub fn speed_range_series(rows: &[Row]) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    for row in body(rows) {
        let Some(label) = row.first().filter(|l| l.contains(SPEED_RANGE_UNIT)) else {
            continue;
        };
        match coerce_f64(row.cell(1)) {
            Ok(value) if value > 0.0 => points.push(SeriesPoint {
                label: label.to_string(),
                value,
            }),
            Ok(value) => tracing::debug!("Skipping speed range '{}' with non-positive hours {}", label, value),
            Err(w) => tracing::warn!("Skipping speed range '{}': {}", label, w),
        }
    }
    points
}

/// Oil exchange record: `[index, hours]` rows where both cells coerce.
pub fn oil_exchange_series(rows: &[Row]) -> Vec<SeriesPoint> {
    body(rows)
        .filter_map(|row| {
            let parsed = coerce_index(row.first())
                .and_then(|idx| coerce_f64(row.cell(1)).map(|value| (idx, value)));
            match parsed {
                Ok((idx, value)) => Some(SeriesPoint {
                    label: idx.to_string(),
                    value,
                }),
                Err(w) => {
                    tracing::warn!("Skipping oil exchange row {:?}: {}", row.cells(), w);
                    None
                }
            }
        })
        .collect()
}
