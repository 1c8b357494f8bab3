// src/extractors/records.rs
//! Variable-width record rows for the table sections.

use crate::extractors::row::{resolve_value, Row, PLACEHOLDER};
use crate::extractors::section::is_section_start;
use serde::{Deserialize, Serialize};

/// One table data row. Arity follows the table's column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRow(pub Vec<String>);

/// How rows of a table section qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPolicy {
    /// Any row with a non-empty first cell.
    Plain,
    /// `[item, value]` where value goes through the shared fallback chain.
    KeyValue,
    /// Only rows whose cell at `cell` is made entirely of ASCII digits.
    DigitKeyed { cell: usize },
    /// Stops at the first item equal (case-insensitively) to `sentinel`;
    /// items containing any of `excluded` are dropped wherever they occur.
    SentinelTruncated {
        sentinel: &'static str,
        excluded: &'static [&'static str],
    },
}

pub const MONITOR_SENTINEL: &str = "engine shut off switch";
pub const MONITOR_CHANNEL_MARKERS: &[&str] = &["(CH1)", "(CH2)", "(CH3)", "(CH4)"];

/// Header rows repeat the column names; they are never data.
fn is_header(row: &Row, columns: &[&str]) -> bool {
    match (row.first(), columns.first()) {
        (Some(first), Some(col)) => first.eq_ignore_ascii_case(col),
        _ => false,
    }
}

fn is_all_digits(cell: Option<&str>) -> bool {
    cell.is_some_and(|c| c.chars().all(|ch| ch.is_ascii_digit()))
}

/// Extracts the qualifying rows of a table section, one `RecordRow` of
/// `columns.len()` cells each. The marker row and header rows are skipped.
pub fn extract_records(rows: &[Row], columns: &[&str], policy: RecordPolicy) -> Vec<RecordRow> {
    let width = columns.len();
    let mut records = Vec::new();

    for row in rows {
        if is_section_start(row) || is_header(row, columns) {
            continue;
        }
        let Some(item) = row.first() else {
            continue;
        };

        match policy {
            RecordPolicy::Plain => records.push(RecordRow(row.take_padded(width))),
            RecordPolicy::KeyValue => {
                let value = resolve_value(row, item);
                if value == PLACEHOLDER {
                    tracing::debug!("Record item '{}' has no value, omitting", item);
                    continue;
                }
                let mut cells = vec![item.to_string(), value.to_string()];
                cells.resize(width, String::new());
                records.push(RecordRow(cells));
            }
            RecordPolicy::DigitKeyed { cell } => {
                if is_all_digits(row.cell(cell)) {
                    records.push(RecordRow(row.take_padded(width)));
                }
            }
            RecordPolicy::SentinelTruncated { sentinel, excluded } => {
                if item.eq_ignore_ascii_case(sentinel) {
                    tracing::debug!("Reached sentinel item '{}', ignoring the rest of the section", item);
                    break;
                }
                if excluded.iter().any(|marker| item.contains(marker)) {
                    continue;
                }
                records.push(RecordRow(row.take_padded(width)));
            }
        }
    }

    records
}
