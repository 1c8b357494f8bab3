// src/extractors/metrics.rs
//! Derived metrics promoted from numbered sections into the metadata block.

use crate::extractors::fields::FieldEntry;
use crate::extractors::row::{resolve_value, PLACEHOLDER};
use crate::extractors::section::Sections;

/// A value looked up by key inside one numbered section.
#[derive(Debug, Clone, Copy)]
pub struct PromotedMetric {
    pub section: u8,
    pub key: &'static str,
    pub display: &'static str,
}

pub const PROMOTED_METRICS: &[PromotedMetric] = &[PromotedMetric {
    section: 3,
    key: "Total operating hours",
    display: "Total Engine Hours",
}];

/// Resolves one metric; `None` if its section or key is absent or the value is a placeholder.
pub fn find_metric(sections: &Sections, metric: &PromotedMetric) -> Option<FieldEntry> {
    let rows = sections.numbered_rows(metric.section);
    let value = rows
        .iter()
        .find(|row| row.first() == Some(metric.key))
        .map(|row| resolve_value(row, metric.key))
        .filter(|v| *v != PLACEHOLDER)?;

    tracing::debug!("Promoted '{}' = '{}' from section {}", metric.display, value, metric.section);
    Some(FieldEntry::new(metric.display, value))
}

/// All promoted metrics that resolved, in declaration order.
pub fn aggregate_metrics(sections: &Sections) -> Vec<FieldEntry> {
    PROMOTED_METRICS
        .iter()
        .filter_map(|m| find_metric(sections, m))
        .collect()
}
